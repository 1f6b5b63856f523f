use sea_orm::TransactionTrait;

use crate::{
    domain::{ClientAggregate, OwnedAddress},
    dto::{
        addresses::AddressRequest,
        clients::{CreateClientRequest, UpdateClientRequest},
    },
    error::{AppError, AppResult},
    models::Client,
    repository::clients,
    state::AppState,
};

pub async fn list_clients(state: &AppState) -> AppResult<Vec<Client>> {
    Ok(clients::find_all(&state.orm).await?)
}

pub async fn get_client(state: &AppState, id: i32) -> AppResult<Client> {
    clients::find_by_id(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Creates a client. Addresses in the payload are attached to it.
pub async fn create_client(state: &AppState, payload: CreateClientRequest) -> AppResult<Client> {
    let mut aggregate = ClientAggregate::new(payload.name, payload.email, payload.phone);
    for address in payload.addresses {
        aggregate.add_address(OwnedAddress::from(address));
    }

    let txn = state.orm.begin().await?;
    let client = clients::save(&txn, aggregate).await?;
    txn.commit().await?;

    tracing::info!(
        client_id = client.id,
        addresses = client.addresses.len(),
        "client created"
    );
    Ok(client)
}

/// Overwrites name, email and phone. Addresses are not touched.
pub async fn update_client(
    state: &AppState,
    id: i32,
    payload: UpdateClientRequest,
) -> AppResult<Client> {
    let txn = state.orm.begin().await?;

    let mut aggregate = clients::lock_aggregate(&txn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    aggregate.update_contact(payload.name, payload.email, payload.phone);
    let client = clients::save(&txn, aggregate).await?;

    txn.commit().await?;

    tracing::info!(client_id = client.id, "client updated");
    Ok(client)
}

/// Deletes the client together with every address it owns.
pub async fn delete_client(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    if !clients::exists_by_id(&txn, id).await? {
        return Err(AppError::NotFound);
    }
    clients::delete_by_id(&txn, id).await?;

    txn.commit().await?;

    tracing::info!(client_id = id, "client deleted");
    Ok(())
}

/// Appends a new address to the client and makes the client its owner.
pub async fn add_address(
    state: &AppState,
    client_id: i32,
    payload: AddressRequest,
) -> AppResult<Client> {
    let txn = state.orm.begin().await?;

    let mut aggregate = clients::lock_aggregate(&txn, client_id)
        .await?
        .ok_or(AppError::NotFound)?;
    aggregate.add_address(OwnedAddress::from(payload));
    let client = clients::save(&txn, aggregate).await?;

    txn.commit().await?;

    tracing::info!(
        client_id,
        address_id = client.addresses.last().map(|a| a.id),
        "address attached to client"
    );
    Ok(client)
}

/// Detaches an address from the client, which deletes it.
///
/// Only an unknown client is an error. An address id the client does not own
/// leaves the client as it was and still succeeds.
pub async fn remove_address(
    state: &AppState,
    client_id: i32,
    address_id: i32,
) -> AppResult<Client> {
    let txn = state.orm.begin().await?;

    let mut aggregate = clients::lock_aggregate(&txn, client_id)
        .await?
        .ok_or(AppError::NotFound)?;
    if aggregate.remove_address(address_id).is_none() {
        tracing::debug!(client_id, address_id, "address not owned by client, nothing removed");
    }
    let client = clients::save(&txn, aggregate).await?;

    txn.commit().await?;

    tracing::info!(client_id, address_id, "address detached from client");
    Ok(client)
}
