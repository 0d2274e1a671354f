// Whiskers web application
// Decision: Shared library so the binary and router tests build the same app
//
// Routes:
// - pages: static informational pages and the cats voting page
// - votes: in-memory image voting
// - api: calendar event CRUD backed by SQLite

pub mod api;
pub mod config;
pub mod error;
pub mod openapi;
pub mod pages;
pub mod services;
pub mod votes;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use utoipa::OpenApi;
use whiskers_core::VoteTally;
use whiskers_storage::Database;

pub use config::Config;
pub use error::ApiError;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Build the application router (without transport layers)
pub fn app(db: Arc<Database>, tally: Arc<VoteTally>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-doc/openapi.json", get(openapi_json))
        .merge(api::events::routes(api::events::AppState::new(db)))
        .merge(votes::routes(votes::AppState::new(tally.clone())))
        .merge(pages::routes(pages::AppState::new(tally)))
}
