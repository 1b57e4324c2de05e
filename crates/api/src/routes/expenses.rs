//! Expense CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error_response, lock_poisoned};
use outgo_core::expense::{Category, Expense, ExpenseFilter, ExpenseUpdate, NewExpense};
use outgo_core::store::StoreError;
use outgo_shared::AppError;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses))
        .route("/expenses", post(create_expense))
        .route("/expenses", delete(clear_expenses))
        .route("/expenses/{id}", get(get_expense))
        .route("/expenses/{id}", patch(update_expense))
        .route("/expenses/{id}", delete(delete_expense))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing expenses.
#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    /// Filter by category label.
    pub category: Option<String>,
    /// Inclusive date range start (YYYY-MM-DD).
    pub from: Option<NaiveDate>,
    /// Inclusive date range end (YYYY-MM-DD).
    pub to: Option<NaiveDate>,
    /// Case-insensitive search over description and category label.
    pub q: Option<String>,
}

/// Request body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Amount (positive decimal string).
    pub amount: String,
    /// Description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Expense date (YYYY-MM-DD).
    pub date: NaiveDate,
}

/// Request body for partially updating an expense.
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    /// New amount, if changing.
    pub amount: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New category label, if changing.
    pub category: Option<String>,
    /// New expense date, if changing.
    pub date: Option<NaiveDate>,
}

/// Response for a single expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: Uuid,
    /// Amount.
    pub amount: String,
    /// Description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Expense date.
    pub date: String,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
}

fn expense_response(expense: &Expense) -> ExpenseResponse {
    ExpenseResponse {
        id: expense.id,
        amount: expense.amount.to_string(),
        description: expense.description.clone(),
        category: expense.category.to_string(),
        date: expense.date.to_string(),
        created_at: expense.created_at.to_rfc3339(),
        updated_at: expense.updated_at.to_rfc3339(),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/expenses` - List expenses with optional filters, sorted by expense
/// date descending.
async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ListExpensesQuery>,
) -> Response {
    let category = match query.category.as_deref().map(parse_category).transpose() {
        Ok(category) => category,
        Err(response) => return response,
    };

    let filter = ExpenseFilter {
        category,
        date_from: query.from,
        date_to: query.to,
        search: query.q,
    };

    let Ok(store) = state.store.read() else {
        return lock_poisoned();
    };
    let items: Vec<ExpenseResponse> = store.list(&filter).iter().map(expense_response).collect();

    (StatusCode::OK, Json(json!({ "expenses": items }))).into_response()
}

/// POST `/expenses` - Create a new expense.
async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Response {
    let amount = match parse_positive_amount(&payload.amount) {
        Ok(amount) => amount,
        Err(response) => return response,
    };
    let category = match parse_category(&payload.category) {
        Ok(category) => category,
        Err(response) => return response,
    };
    if payload.description.trim().is_empty() {
        return error_response(&AppError::Validation(
            "Description must not be empty".to_string(),
        ));
    }

    let Ok(mut store) = state.store.write() else {
        return lock_poisoned();
    };
    let expense = store.add(NewExpense {
        amount,
        description: payload.description,
        category,
        date: payload.date,
    });

    info!(expense_id = %expense.id, category = %expense.category, "Expense created");

    (StatusCode::CREATED, Json(expense_response(&expense))).into_response()
}

/// GET `/expenses/{id}` - Single expense lookup.
async fn get_expense(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let Ok(store) = state.store.read() else {
        return lock_poisoned();
    };
    match store.get(id) {
        Some(expense) => (StatusCode::OK, Json(expense_response(expense))).into_response(),
        None => error_response(&AppError::NotFound(format!("Expense {id}"))),
    }
}

/// PATCH `/expenses/{id}` - Partially update an expense. Fields not supplied
/// are left unchanged; id and creation time cannot be altered.
async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Response {
    let amount = match payload
        .amount
        .as_deref()
        .map(parse_positive_amount)
        .transpose()
    {
        Ok(amount) => amount,
        Err(response) => return response,
    };
    let category = match payload.category.as_deref().map(parse_category).transpose() {
        Ok(category) => category,
        Err(response) => return response,
    };
    if let Some(description) = &payload.description {
        if description.trim().is_empty() {
            return error_response(&AppError::Validation(
                "Description must not be empty".to_string(),
            ));
        }
    }

    let patch = ExpenseUpdate {
        amount,
        description: payload.description,
        category,
        date: payload.date,
    };

    let Ok(mut store) = state.store.write() else {
        return lock_poisoned();
    };
    match store.update(id, patch) {
        Ok(expense) => {
            info!(expense_id = %id, "Expense updated");
            (StatusCode::OK, Json(expense_response(&expense))).into_response()
        }
        Err(StoreError::NotFound(_)) => error_response(&AppError::NotFound(format!("Expense {id}"))),
        Err(e) => error_response(&AppError::Internal(e.to_string())),
    }
}

/// DELETE `/expenses/{id}` - Delete an expense.
async fn delete_expense(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let Ok(mut store) = state.store.write() else {
        return lock_poisoned();
    };
    if store.remove(id) {
        info!(expense_id = %id, "Expense deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(&AppError::NotFound(format!("Expense {id}")))
    }
}

/// DELETE `/expenses` - Clear the whole collection. Irreversible.
async fn clear_expenses(State(state): State<AppState>) -> Response {
    let Ok(mut store) = state.store.write() else {
        return lock_poisoned();
    };
    store.clear();
    info!("Expense collection cleared");
    StatusCode::NO_CONTENT.into_response()
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_positive_amount(raw: &str) -> Result<Decimal, Response> {
    match Decimal::from_str(raw) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        Ok(_) => Err(error_response(&AppError::Validation(
            "Amount must be positive".to_string(),
        ))),
        Err(_) => Err(error_response(&AppError::Validation(
            "Invalid amount format".to_string(),
        ))),
    }
}

fn parse_category(raw: &str) -> Result<Category, Response> {
    Category::from_str(raw)
        .map_err(|_| error_response(&AppError::Validation(format!("Unknown category: {raw}"))))
}
