//! Client persistence. The client row and its address rows are written as one
//! graph: saving applies orphan removal and deleting cascades to addresses.
//! Callers wrap multi-step use in a transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use sea_orm::sea_query::LockType;

use crate::{
    domain::{ClientAggregate, OwnedAddress},
    entity::{
        addresses::{
            ActiveModel as AddressActive, Column as AddressCol, Entity as Addresses,
            Model as AddressModel,
        },
        clients::{ActiveModel, Column, Entity as Clients, Model as ClientModel},
    },
    models::Client,
    repository::addresses::address_from_entity,
};

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Client>, DbErr> {
    let Some(client) = Clients::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };
    let addresses = owned_addresses(conn, client.id).await?;
    Ok(Some(client_from_entity(client, addresses)))
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Client>, DbErr> {
    let rows = Clients::find()
        .find_with_related(Addresses)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(client, mut addresses)| {
            addresses.sort_by_key(|a| a.id);
            client_from_entity(client, addresses)
        })
        .collect())
}

/// Loads the client aggregate and locks the client row for the rest of the
/// surrounding transaction where the backend supports row locks.
pub async fn lock_aggregate<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<ClientAggregate>, DbErr> {
    let Some(client) = Clients::find_by_id(id)
        .lock(LockType::Update)
        .one(conn)
        .await?
    else {
        return Ok(None);
    };
    let addresses = owned_addresses(conn, client.id)
        .await?
        .into_iter()
        .map(owned_from_entity)
        .collect();
    Ok(Some(ClientAggregate::restore(
        client.id,
        client.name,
        client.email,
        client.phone,
        addresses,
    )))
}

/// Writes the aggregate.
///
/// The client row is inserted or updated. Address rows owned by this client
/// but no longer in the collection are deleted. Addresses without an id are
/// inserted with the client as owner. Persisted addresses still in the
/// collection are left as they are.
pub async fn save<C: ConnectionTrait>(
    conn: &C,
    mut aggregate: ClientAggregate,
) -> Result<Client, DbErr> {
    let row = match aggregate.id {
        Some(id) => {
            ActiveModel {
                id: Unchanged(id),
                name: Set(aggregate.name.clone()),
                email: Set(aggregate.email.clone()),
                phone: Set(aggregate.phone.clone()),
            }
            .update(conn)
            .await?
        }
        None => {
            ActiveModel {
                id: NotSet,
                name: Set(aggregate.name.clone()),
                email: Set(aggregate.email.clone()),
                phone: Set(aggregate.phone.clone()),
            }
            .insert(conn)
            .await?
        }
    };
    aggregate.assign_id(row.id);

    let retained = aggregate.retained_address_ids();
    let mut orphans = Addresses::delete_many().filter(AddressCol::ClientId.eq(row.id));
    if !retained.is_empty() {
        orphans = orphans.filter(AddressCol::Id.is_not_in(retained));
    }
    let removed = orphans.exec(conn).await?.rows_affected;
    if removed > 0 {
        tracing::debug!(client_id = row.id, removed, "orphaned addresses deleted");
    }

    for address in aggregate.into_addresses() {
        if address.id.is_some() {
            continue;
        }
        AddressActive {
            id: NotSet,
            street: Set(address.street),
            city: Set(address.city),
            state: Set(address.state),
            zip_code: Set(address.zip_code),
            client_id: Set(Some(row.id)),
        }
        .insert(conn)
        .await?;
    }

    let addresses = owned_addresses(conn, row.id).await?;
    Ok(client_from_entity(row, addresses))
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Clients::find_by_id(id).count(conn).await? > 0)
}

/// Deletes the client's addresses, then the client.
pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let cascaded = Addresses::delete_many()
        .filter(AddressCol::ClientId.eq(id))
        .exec(conn)
        .await?
        .rows_affected;
    let result = Clients::delete_by_id(id).exec(conn).await?;
    if result.rows_affected > 0 {
        tracing::debug!(client_id = id, cascaded, "client deleted with its addresses");
    }
    Ok(result.rows_affected > 0)
}

async fn owned_addresses<C: ConnectionTrait>(
    conn: &C,
    client_id: i32,
) -> Result<Vec<AddressModel>, DbErr> {
    Addresses::find()
        .filter(AddressCol::ClientId.eq(client_id))
        .order_by_asc(AddressCol::Id)
        .all(conn)
        .await
}

fn owned_from_entity(model: AddressModel) -> OwnedAddress {
    OwnedAddress {
        id: Some(model.id),
        street: model.street,
        city: model.city,
        state: model.state,
        zip_code: model.zip_code,
        client_id: model.client_id,
    }
}

fn client_from_entity(model: ClientModel, addresses: Vec<AddressModel>) -> Client {
    Client {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        addresses: addresses.into_iter().map(address_from_entity).collect(),
    }
}
