//! Expense management.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model, its `Amount` and `Category`, and `ExpenseBuilder` for creating expenses
//! - Validation of submitted expense forms
//! - The `ExpenseStore` trait and its SQLite implementation
//! - View handlers for the expense pages and the HTMX and JSON endpoints

mod amount;
mod api;
mod category;
mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod expenses_page;
mod form;
mod sqlite;
mod store;
mod validation;

pub use amount::Amount;
pub use api::get_expenses_json;
pub use category::Category;
pub use core::{Expense, ExpenseBuilder};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use edit_page::get_edit_expense_page;
pub use expenses_page::get_expenses_page;
pub use sqlite::{SQLiteExpenseStore, create_expense_table};
pub use store::ExpenseStore;
pub use validation::{ExpenseForm, ValidationError};
