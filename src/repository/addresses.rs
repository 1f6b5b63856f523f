use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, TryIntoModel};

use crate::{
    entity::addresses::{ActiveModel, Entity as Addresses, Model as AddressModel},
    models::Address,
};

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Address>, DbErr> {
    Ok(Addresses::find_by_id(id)
        .one(conn)
        .await?
        .map(address_from_entity))
}

/// Inserts when the id is unset, updates otherwise. Columns left `NotSet` or
/// `Unchanged` are not written on update.
pub async fn save<C: ConnectionTrait>(conn: &C, active: ActiveModel) -> Result<Address, DbErr> {
    let saved = active.save(conn).await?.try_into_model()?;
    Ok(address_from_entity(saved))
}

pub async fn exists_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Addresses::find_by_id(id).count(conn).await? > 0)
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, DbErr> {
    let result = Addresses::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

pub(crate) fn address_from_entity(model: AddressModel) -> Address {
    Address {
        id: model.id,
        street: model.street,
        city: model.city,
        state: model.state,
        zip_code: model.zip_code,
        client_id: model.client_id,
    }
}
