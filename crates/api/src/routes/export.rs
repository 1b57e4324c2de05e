//! CSV export endpoint.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{AppState, lock_poisoned};

/// GET `/export` - The collection as CSV, in insertion order. An empty
/// collection yields an empty body.
async fn export_csv(State(state): State<AppState>) -> Response {
    let Ok(store) = state.store.read() else {
        return lock_poisoned();
    };
    let body = store.export_csv();
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        body,
    )
        .into_response()
}

/// Creates the export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/export", get(export_csv))
}
