//! Defines the endpoint for deleting an expense.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState,
    database_id::ExpenseId,
    endpoints,
    expense::{ExpenseStore, SQLiteExpenseStore},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The store holding the expense to delete.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// A route handler for deleting an expense, redirects to the expenses view on success.
pub async fn delete_expense_endpoint(
    State(mut state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    if let Err(error) = state.expense_store.delete(expense_id) {
        tracing::error!("Could not delete expense {expense_id}: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        endpoints,
        expense::{Amount, Category, Expense, ExpenseStore, SQLiteExpenseStore},
        test_utils::assert_hx_redirect,
    };

    use super::{DeleteExpenseState, delete_expense_endpoint};

    fn get_state() -> DeleteExpenseState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        DeleteExpenseState {
            expense_store: SQLiteExpenseStore::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn deletes_expense() {
        let mut state = get_state();
        let expense = state
            .expense_store
            .create(Expense::build(
                Amount::new(dec!(1.23)).unwrap(),
                Category::Shopping,
                date!(2025 - 10 - 26),
            ))
            .unwrap();

        let response = delete_expense_endpoint(State(state.clone()), Path(expense.id)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::EXPENSES_VIEW);
        assert_eq!(state.expense_store.get(expense.id), Err(Error::NotFound));
    }

    #[tokio::test]
    async fn delete_missing_expense_returns_not_found() {
        let state = get_state();

        let response = delete_expense_endpoint(State(state), Path(42)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
