//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Application state
//! - Error response mapping

pub mod routes;

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use outgo_core::store::ExpenseStore;
use outgo_shared::AppError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The expense store. Guarded by a lock for the single logical writer;
    /// every store operation is short and synchronous.
    pub store: Arc<RwLock<ExpenseStore>>,
}

impl AppState {
    /// Creates state around an opened store.
    #[must_use]
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Maps an `AppError` to its JSON error response.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Response for a poisoned state lock. Should not happen in practice since
/// handlers never panic while holding the lock.
pub(crate) fn lock_poisoned() -> Response {
    error_response(&AppError::Internal("state lock poisoned".to_string()))
}
