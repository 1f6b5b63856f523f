use sea_orm::ActiveValue::{NotSet, Unchanged};
use sea_orm::{Set, TransactionTrait};

use crate::{
    dto::addresses::AddressRequest,
    entity::addresses::ActiveModel,
    error::{AppError, AppResult},
    models::Address,
    repository::addresses,
    state::AppState,
};

pub async fn get_address(state: &AppState, id: i32) -> AppResult<Address> {
    addresses::find_by_id(&state.orm, id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Creates a detached address.
pub async fn create_address(state: &AppState, payload: AddressRequest) -> AppResult<Address> {
    let active = ActiveModel {
        id: NotSet,
        street: Set(payload.street),
        city: Set(payload.city),
        state: Set(payload.state),
        zip_code: Set(payload.zip_code),
        client_id: Set(None),
    };
    let address = addresses::save(&state.orm, active).await?;
    tracing::info!(address_id = address.id, "address created");
    Ok(address)
}

/// Overwrites the street fields. The owner is never written on this path.
pub async fn update_address(
    state: &AppState,
    id: i32,
    payload: AddressRequest,
) -> AppResult<Address> {
    let txn = state.orm.begin().await?;

    if !addresses::exists_by_id(&txn, id).await? {
        return Err(AppError::NotFound);
    }

    let active = ActiveModel {
        id: Unchanged(id),
        street: Set(payload.street),
        city: Set(payload.city),
        state: Set(payload.state),
        zip_code: Set(payload.zip_code),
        client_id: NotSet,
    };
    let address = addresses::save(&txn, active).await?;

    txn.commit().await?;

    tracing::info!(address_id = address.id, "address updated");
    Ok(address)
}

pub async fn delete_address(state: &AppState, id: i32) -> AppResult<()> {
    if !addresses::exists_by_id(&state.orm, id).await? {
        return Err(AppError::NotFound);
    }
    addresses::delete_by_id(&state.orm, id).await?;
    tracing::info!(address_id = id, "address deleted");
    Ok(())
}
