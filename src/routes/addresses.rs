use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::addresses::AddressRequest, error::AppResult, models::Address,
    services::address_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_address))
        .route(
            "/{id}",
            get(get_address).put(update_address).delete(delete_address),
        )
}

#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Get address", body = Address),
        (status = 404, description = "Address not found"),
    ),
    tag = "Addresses"
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Address>> {
    let address = address_service::get_address(&state, id).await?;
    Ok(Json(address))
}

#[utoipa::path(
    post,
    path = "/api/addresses",
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Create a detached address", body = Address)
    ),
    tag = "Addresses"
)]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<AddressRequest>,
) -> AppResult<(StatusCode, Json<Address>)> {
    let address = address_service::create_address(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Updated address", body = Address),
        (status = 404, description = "Address not found"),
    ),
    tag = "Addresses"
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddressRequest>,
) -> AppResult<Json<Address>> {
    let address = address_service::update_address(&state, id, payload).await?;
    Ok(Json(address))
}

#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Deleted address"),
        (status = 404, description = "Address not found"),
    ),
    tag = "Addresses"
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    address_service::delete_address(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
