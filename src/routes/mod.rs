use axum::{Json, Router, http::StatusCode, http::Uri};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod addresses;
pub mod clients;
pub mod doc;
pub mod health;
pub mod product_categories;
pub mod products;
pub mod subcategories;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/addresses", addresses::router())
        .nest("/clients", clients::router())
        .nest("/product-categories", product_categories::router())
        .nest("/subcategories", subcategories::router())
        .nest("/products", products::router())
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::now()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
