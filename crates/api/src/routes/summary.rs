//! Summary endpoint.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{AppState, lock_poisoned};

/// GET `/summary` - Aggregate summary over the whole collection: grand
/// total, current-month total, per-category breakdown, and ranked category
/// shares.
async fn get_summary(State(state): State<AppState>) -> Response {
    let Ok(store) = state.store.read() else {
        return lock_poisoned();
    };
    Json(store.summary()).into_response()
}

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}
