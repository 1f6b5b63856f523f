//! Client aggregate and the addresses it owns.
//!
//! Addresses are stored by value inside the aggregate and point back to their
//! owner by id only. Ownership changes go through [`ClientAggregate::add_address`]
//! and [`ClientAggregate::remove_address`], which keep the back-reference and
//! the collection membership in step.

use crate::dto::addresses::AddressRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct OwnedAddress {
    /// `None` until the row has been inserted.
    pub id: Option<i32>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub client_id: Option<i32>,
}

impl From<AddressRequest> for OwnedAddress {
    fn from(request: AddressRequest) -> Self {
        Self {
            id: None,
            street: request.street,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            client_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientAggregate {
    /// `None` for a client that has not been saved yet.
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    addresses: Vec<OwnedAddress>,
}

impl ClientAggregate {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            id: None,
            name,
            email,
            phone,
            addresses: Vec::new(),
        }
    }

    /// Rebuilds a persisted client. Addresses are taken as owned by `id`.
    pub fn restore(
        id: i32,
        name: String,
        email: String,
        phone: String,
        addresses: Vec<OwnedAddress>,
    ) -> Self {
        let mut client = Self {
            id: Some(id),
            name,
            email,
            phone,
            addresses: Vec::with_capacity(addresses.len()),
        };
        for address in addresses {
            client.add_address(address);
        }
        client
    }

    pub fn addresses(&self) -> &[OwnedAddress] {
        &self.addresses
    }

    pub fn into_addresses(self) -> Vec<OwnedAddress> {
        self.addresses
    }

    /// Overwrites the contact fields. The address collection is untouched.
    pub fn update_contact(&mut self, name: String, email: String, phone: String) {
        self.name = name;
        self.email = email;
        self.phone = phone;
    }

    /// Appends an address and makes this client its owner.
    pub fn add_address(&mut self, mut address: OwnedAddress) {
        address.client_id = self.id;
        self.addresses.push(address);
    }

    /// Detaches the address with `address_id`. Returns `None` when the client
    /// does not own such an address, in which case nothing changes.
    pub fn remove_address(&mut self, address_id: i32) -> Option<OwnedAddress> {
        let position = self
            .addresses
            .iter()
            .position(|address| address.id == Some(address_id))?;
        let mut removed = self.addresses.remove(position);
        removed.client_id = None;
        Some(removed)
    }

    /// Stamps the saved identity on the client and every owned address.
    pub fn assign_id(&mut self, id: i32) {
        self.id = Some(id);
        for address in &mut self.addresses {
            address.client_id = Some(id);
        }
    }

    /// True when every owned address points back to this client.
    #[cfg(test)]
    fn owns_all_addresses(&self) -> bool {
        self.addresses
            .iter()
            .all(|address| address.client_id == self.id)
    }

    /// Ids of persisted addresses still in the collection.
    pub fn retained_address_ids(&self) -> Vec<i32> {
        self.addresses.iter().filter_map(|address| address.id).collect()
    }
}
