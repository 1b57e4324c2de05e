//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod expenses;
pub mod export;
pub mod health;
pub mod summary;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(expenses::routes())
        .merge(summary::routes())
        .merge(export::routes())
}
