//! Defines the route handler for the page that lists expenses under month headers.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{MonthGroup, group_by_month},
    endpoints::{self, format_endpoint},
    expense::{Expense, ExpenseStore, SQLiteExpenseStore},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, link,
    },
    navigation::NavBar,
};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The store for reading expenses.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// Renders every expense, newest first, grouped by calendar month.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    let expenses = state
        .expense_store
        .list()
        .inspect_err(|error| tracing::error!("Could not get expenses: {error}"))?;

    Ok(expenses_view(&group_by_month(expenses)).into_response())
}

fn expenses_view(month_groups: &[MonthGroup]) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                div class="flex justify-between flex-wrap items-end mb-4"
                {
                    h1 class="text-xl font-bold" { "Expenses" }

                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE) { "Add Expense" }
                }

                @if month_groups.is_empty() {
                    p
                    {
                        "No expenses yet. Start by "
                        (link(endpoints::NEW_EXPENSE_VIEW, "adding an expense"))
                        "."
                    }
                }

                @for group in month_groups {
                    (month_group_view(group))
                }
            }
        }
    };

    base("Expenses", &[], &content)
}

fn month_group_view(group: &MonthGroup) -> Markup {
    html! {
        section class="mb-8 overflow-x-auto rounded-lg shadow" data-month=(group.month.key())
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                caption
                    class="px-6 py-3 text-left text-base font-semibold text-gray-900
                        bg-white dark:bg-gray-800 dark:text-white"
                {
                    div class="flex justify-between"
                    {
                        span { (group.month.label()) }
                        span class="month-total" { (format_currency(group.total)) }
                    }
                }

                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for expense in &group.expenses {
                        (expense_row_view(expense))
                    }
                }
            }
        }
    }
}

fn expense_row_view(expense: &Expense) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id);
    let delete_url = format_endpoint(endpoints::EXPENSE, expense.id);
    let confirm_message = if expense.description.is_empty() {
        "Are you sure you want to delete this expense? This cannot be undone.".to_owned()
    } else {
        format!(
            "Are you sure you want to delete the expense '{}'? This cannot be undone.",
            expense.description
        )
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { time datetime=(expense.date) { (expense.date) } }
            td class=(TABLE_CELL_STYLE) { (expense.description) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (expense.category.label()) }
            }
            td class={(TABLE_CELL_STYLE) " text-right whitespace-nowrap"} { (format_currency(expense.amount.value())) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-confirm=(confirm_message)
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
