//! Defines the route handler for the page for editing an existing expense.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints::{self, format_endpoint},
    expense::{
        Expense, ExpenseStore, SQLiteExpenseStore,
        form::{ExpenseFormDefaults, expense_form_fields},
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles, link,
        loading_spinner,
    },
    navigation::NavBar,
};

fn edit_expense_view(expense: &Expense) -> Markup {
    let nav_bar = NavBar::new(endpoints::EDIT_EXPENSE_VIEW).into_html();
    let spinner = loading_spinner();
    let update_endpoint = format_endpoint(endpoints::EXPENSE, expense.id);
    let form_fields = expense_form_fields(&ExpenseFormDefaults {
        amount: Some(expense.amount),
        category: expense.category,
        description: Some(&expense.description),
        date: expense.date,
        autofocus_amount: false,
    });

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Expense" }

                (form_fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Update Expense"
                }

                p class="text-sm text-center" { (link(endpoints::EXPENSES_VIEW, "Cancel")) }
            }
        }
    };

    base("Edit Expense", &[dollar_input_styles()], &content)
}

/// The state needed for the edit expense page.
#[derive(Debug, Clone)]
pub struct EditExpensePageState {
    /// The store for retrieving the expense to edit.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for EditExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// Renders the page for editing an expense.
///
/// Responds with the 404 page if the expense does not exist.
pub async fn get_edit_expense_page(
    State(state): State<EditExpensePageState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let expense = state
        .expense_store
        .get(expense_id)
        .inspect_err(|error| tracing::error!("Failed to retrieve expense {expense_id}: {error}"))?;

    Ok(edit_expense_view(&expense).into_response())
}
