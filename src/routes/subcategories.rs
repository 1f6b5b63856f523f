use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::subcategories::SubcategoryRequest,
    error::AppResult,
    models::Subcategory,
    services::subcategory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subcategories).post(create_subcategory))
        .route(
            "/{id}",
            get(get_subcategory).put(update_subcategory).delete(delete_subcategory),
        )
}

#[utoipa::path(
    get,
    path = "/api/subcategories",
    responses(
        (status = 200, description = "List subcategories with their category", body = Vec<Subcategory>)
    ),
    tag = "Subcategories"
)]
pub async fn list_subcategories(State(state): State<AppState>) -> AppResult<Json<Vec<Subcategory>>> {
    let subcategories = subcategory_service::list_subcategories(&state).await?;
    Ok(Json(subcategories))
}

#[utoipa::path(
    get,
    path = "/api/subcategories/{id}",
    params(
        ("id" = i32, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Get subcategory", body = Subcategory),
        (status = 404, description = "Subcategory not found"),
    ),
    tag = "Subcategories"
)]
pub async fn get_subcategory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Subcategory>> {
    let subcategory = subcategory_service::get_subcategory(&state, id).await?;
    Ok(Json(subcategory))
}

#[utoipa::path(
    post,
    path = "/api/subcategories",
    request_body = SubcategoryRequest,
    responses(
        (status = 201, description = "Create subcategory", body = Subcategory),
        (status = 400, description = "Missing or unknown category"),
    ),
    tag = "Subcategories"
)]
pub async fn create_subcategory(
    State(state): State<AppState>,
    Json(payload): Json<SubcategoryRequest>,
) -> AppResult<(StatusCode, Json<Subcategory>)> {
    let subcategory = subcategory_service::create_subcategory(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(subcategory)))
}

#[utoipa::path(
    put,
    path = "/api/subcategories/{id}",
    params(
        ("id" = i32, Path, description = "Subcategory ID")
    ),
    request_body = SubcategoryRequest,
    responses(
        (status = 200, description = "Updated subcategory; category replaced only if the given id resolves", body = Subcategory),
        (status = 404, description = "Subcategory not found"),
    ),
    tag = "Subcategories"
)]
pub async fn update_subcategory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SubcategoryRequest>,
) -> AppResult<Json<Subcategory>> {
    let subcategory = subcategory_service::update_subcategory(&state, id, payload).await?;
    Ok(Json(subcategory))
}

#[utoipa::path(
    delete,
    path = "/api/subcategories/{id}",
    params(
        ("id" = i32, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 204, description = "Deleted subcategory"),
        (status = 404, description = "Subcategory not found"),
    ),
    tag = "Subcategories"
)]
pub async fn delete_subcategory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    subcategory_service::delete_subcategory(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
