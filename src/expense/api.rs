//! Defines the read-only JSON endpoint for listing expenses.

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    expense::{ExpenseStore, SQLiteExpenseStore},
};

/// The state needed to list expenses as JSON.
#[derive(Debug, Clone)]
pub struct ExpensesApiState {
    /// The store for reading expenses.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for ExpensesApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// A route handler that responds with every expense as JSON, newest first.
///
/// Amounts are decimal strings and dates are formatted as YYYY-MM-DD.
pub async fn get_expenses_json(State(state): State<ExpensesApiState>) -> Response {
    match state.expense_store.list() {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(error) => {
            tracing::error!("Could not list expenses: {error}");
            error.into_response()
        }
    }
}
