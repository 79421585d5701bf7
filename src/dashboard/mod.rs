//! Dashboard module
//!
//! Provides an overview page with the total spent, charts and tables of the
//! expenses broken down by category and by month, plus the same summary as JSON.

mod aggregation;
mod charts;
mod handlers;
mod summary_endpoint;
mod tables;

pub use aggregation::{
    CalendarMonth, CategoryTotal, MonthGroup, MonthlyTotal, category_totals, group_by_month,
    monthly_totals, total_amount,
};
pub use handlers::get_dashboard_page;
pub use summary_endpoint::get_summary_json;
