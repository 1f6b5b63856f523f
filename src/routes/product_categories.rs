use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::product_categories::ProductCategoryRequest,
    error::AppResult,
    models::ProductCategory,
    services::product_category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_product_categories).post(create_product_category))
        .route(
            "/{id}",
            get(get_product_category).put(update_product_category).delete(delete_product_category),
        )
}

#[utoipa::path(
    get,
    path = "/api/product-categories",
    responses(
        (status = 200, description = "List product categories", body = Vec<ProductCategory>)
    ),
    tag = "Product Categories"
)]
pub async fn list_product_categories(State(state): State<AppState>) -> AppResult<Json<Vec<ProductCategory>>> {
    let categories = product_category_service::list_product_categories(&state).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/product-categories/{id}",
    params(
        ("id" = i32, Path, description = "Product category ID")
    ),
    responses(
        (status = 200, description = "Get product category", body = ProductCategory),
        (status = 404, description = "Product category not found"),
    ),
    tag = "Product Categories"
)]
pub async fn get_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductCategory>> {
    let category = product_category_service::get_product_category(&state, id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/api/product-categories",
    request_body = ProductCategoryRequest,
    responses(
        (status = 201, description = "Create product category", body = ProductCategory),
    ),
    tag = "Product Categories"
)]
pub async fn create_product_category(
    State(state): State<AppState>,
    Json(payload): Json<ProductCategoryRequest>,
) -> AppResult<(StatusCode, Json<ProductCategory>)> {
    let category = product_category_service::create_product_category(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/product-categories/{id}",
    params(
        ("id" = i32, Path, description = "Product category ID")
    ),
    request_body = ProductCategoryRequest,
    responses(
        (status = 200, description = "Updated product category", body = ProductCategory),
        (status = 404, description = "Product category not found"),
    ),
    tag = "Product Categories"
)]
pub async fn update_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductCategoryRequest>,
) -> AppResult<Json<ProductCategory>> {
    let category = product_category_service::update_product_category(&state, id, payload).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/product-categories/{id}",
    params(
        ("id" = i32, Path, description = "Product category ID")
    ),
    responses(
        (status = 204, description = "Deleted product category"),
        (status = 404, description = "Product category not found"),
    ),
    tag = "Product Categories"
)]
pub async fn delete_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    product_category_service::delete_product_category(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
