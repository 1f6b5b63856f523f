use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::{
        addresses::AddressRequest,
        clients::{CreateClientRequest, UpdateClientRequest},
    },
    error::AppResult,
    models::Client,
    services::client_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/{id}/addresses", post(add_address))
        .route("/{id}/addresses/{address_id}", delete(remove_address))
}

#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "List clients with their addresses", body = Vec<Client>)
    ),
    tag = "Clients"
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = client_service::list_clients(&state).await?;
    Ok(Json(clients))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Get client", body = Client),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Client>> {
    let client = client_service::get_client(&state, id).await?;
    Ok(Json(client))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Create client", body = Client)
    ),
    tag = "Clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = client_service::create_client(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client", body = Client),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientRequest>,
) -> AppResult<Json<Client>> {
    let client = client_service::update_client(&state, id, payload).await?;
    Ok(Json(client))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Deleted client and its addresses"),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    client_service::delete_client(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/clients/{id}/addresses",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Client with the new address attached", body = Client),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn add_address(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
    Json(payload): Json<AddressRequest>,
) -> AppResult<Json<Client>> {
    let client = client_service::add_address(&state, client_id, payload).await?;
    Ok(Json(client))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}/addresses/{address_id}",
    params(
        ("id" = i32, Path, description = "Client ID"),
        ("address_id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Client after removal; unchanged if it did not own the address", body = Client),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn remove_address(
    State(state): State<AppState>,
    Path((client_id, address_id)): Path<(i32, i32)>,
) -> AppResult<Json<Client>> {
    let client = client_service::remove_address(&state, client_id, address_id).await?;
    Ok(Json(client))
}
