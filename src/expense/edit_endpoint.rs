//! Defines the endpoint for replacing the fields of an existing expense.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints,
    expense::{ExpenseForm, ExpenseStore, SQLiteExpenseStore},
};

/// The state needed to update an expense.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    /// The store holding the expense to update.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// A route handler for updating an expense, redirects to the expenses view on success.
///
/// Every field is replaced with the submitted values.
pub async fn edit_expense_endpoint(
    State(mut state): State<EditExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::error!("rejected update to expense {expense_id}: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    if let Err(error) = state.expense_store.update(expense_id, builder) {
        tracing::error!("could not update expense {expense_id}: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
