//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{category_totals, monthly_totals, total_amount},
        charts::{DashboardChart, category_chart, charts_script, charts_view, monthly_chart},
        tables::{category_totals_table, monthly_totals_table},
    },
    endpoints,
    expense::{Expense, ExpenseStore, SQLiteExpenseStore},
    html::{HeadElement, base, currency_rounded_with_tooltip, link},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store for reading expenses.
    pub expense_store: SQLiteExpenseStore,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    total: Decimal,
    charts: [DashboardChart; 2],
    tables: [Markup; 2],
}

/// Display a page with an overview of the recorded expenses.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    let expenses = state
        .expense_store
        .list()
        .inspect_err(|error| tracing::error!("Could not get expenses for dashboard: {error}"))?;

    match build_dashboard_data(&expenses) {
        Some(data) => Ok(dashboard_view(nav_bar, &data).into_response()),
        None => Ok(dashboard_no_data_view(nav_bar).into_response()),
    }
}

/// Builds the charts and tables for the dashboard, or `None` if there are no expenses.
fn build_dashboard_data(expenses: &[Expense]) -> Option<DashboardData> {
    if expenses.is_empty() {
        return None;
    }

    let category_totals = category_totals(expenses);
    let monthly_totals = monthly_totals(expenses);

    Some(DashboardData {
        total: total_amount(expenses),
        charts: [
            DashboardChart {
                id: "category-chart",
                options: category_chart(&category_totals).to_string(),
            },
            DashboardChart {
                id: "monthly-chart",
                options: monthly_chart(&monthly_totals).to_string(),
            },
        ],
        tables: [
            category_totals_table(&category_totals),
            monthly_totals_table(&monthly_totals),
        ],
    })
}

/// Renders the dashboard page when there are no expenses.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "adding an expense");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once you add some expenses. Get started by "
                (new_expense_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with the total, charts and tables.
fn dashboard_view(nav_bar: NavBar<'_>, data: &DashboardData) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            section id="total" class="w-full mb-4 p-4 rounded-lg bg-white dark:bg-gray-800 shadow"
            {
                h2 class="text-sm font-medium text-gray-500 dark:text-gray-400" { "Total Spent" }
                p class="text-3xl font-bold" { (currency_rounded_with_tooltip(data.total)) }
            }

            (charts_view(&data.charts))

            section id="tables" class="w-full grid grid-cols-1 xl:grid-cols-2 gap-4 mb-8"
            {
                @for table in &data.tables {
                    (table)
                }
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&data.charts),
    ];

    base("Dashboard", &scripts, &content)
}
