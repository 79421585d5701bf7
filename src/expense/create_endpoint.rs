//! Defines the endpoint for creating a new expense.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseForm, ExpenseStore, SQLiteExpenseStore},
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The store for saving the new expense.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// A route handler for creating a new expense, redirects to the expenses view on success.
///
/// Invalid input is rejected with an alert and nothing is stored.
pub async fn create_expense_endpoint(
    State(mut state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::error!("rejected new expense: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    if let Err(error) = state.expense_store.create(builder) {
        tracing::error!("could not create expense: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
