//! Defines the expense store trait.

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{Expense, ExpenseBuilder},
};

/// Handles the creation, retrieval, replacement and removal of expenses.
pub trait ExpenseStore {
    /// Retrieve every expense, newest first.
    ///
    /// Expenses on the same date are ordered by descending ID so that the
    /// most recently added one comes first.
    fn list(&self) -> Result<Vec<Expense>, Error>;

    /// Retrieve a single expense.
    ///
    /// Returns [Error::NotFound] if `id` does not refer to a stored expense.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Store a new expense and return it with its assigned ID.
    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Replace every field of the expense with `id`.
    ///
    /// Returns [Error::UpdateMissingExpense] if `id` does not refer to a stored expense.
    fn update(&mut self, id: ExpenseId, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Remove the expense with `id`.
    ///
    /// Returns [Error::DeleteMissingExpense] if `id` does not refer to a stored expense.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error>;
}
