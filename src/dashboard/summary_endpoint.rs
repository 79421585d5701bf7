//! Defines the read-only JSON endpoint for the expense summaries.

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    AppState,
    dashboard::aggregation::{
        CategoryTotal, MonthlyTotal, category_totals, monthly_totals, total_amount,
    },
    expense::{Expense, ExpenseStore, SQLiteExpenseStore},
};

/// The state needed for the summary endpoint.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The store for reading expenses.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    total: Decimal,
    categories: Vec<CategoryTotal>,
    months: Vec<MonthSummary>,
}

#[derive(Debug, Serialize)]
struct MonthSummary {
    /// The month as "YYYY-MM".
    month: String,
    /// The month as "Jan 2024".
    label: String,
    total: Decimal,
}

impl From<MonthlyTotal> for MonthSummary {
    fn from(monthly_total: MonthlyTotal) -> Self {
        Self {
            month: monthly_total.month.key(),
            label: monthly_total.month.label(),
            total: monthly_total.total,
        }
    }
}

fn summarise(expenses: &[Expense]) -> Summary {
    Summary {
        total: total_amount(expenses),
        categories: category_totals(expenses),
        months: monthly_totals(expenses)
            .into_iter()
            .map(MonthSummary::from)
            .collect(),
    }
}

/// A route handler that responds with the total, category totals and monthly totals as JSON.
pub async fn get_summary_json(State(state): State<SummaryState>) -> Response {
    match state.expense_store.list() {
        Ok(expenses) => (StatusCode::OK, Json(summarise(&expenses))).into_response(),
        Err(error) => {
            tracing::error!("Could not get expenses for summary: {error}");
            error.into_response()
        }
    }
}
