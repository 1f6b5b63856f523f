pub mod config;
pub mod db;
pub mod domain;
pub mod dto;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;
pub mod repository;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};

use crate::{
    routes::{create_api_router, doc::scalar_docs, health, not_found},
    state::AppState,
};

/// Application routes bound to `state`. Transport layers (tracing, request
/// ids, limits) are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(scalar_docs())
        .fallback(not_found)
        .with_state(state)
}
