//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{Expense, ExpenseBuilder, ExpenseStore, category::sql_category_list},
};

/// Stores expenses in a SQLite database.
///
/// The `expense` table must exist, see [create_expense_table].
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is a SQL error.
    fn list(&self) -> Result<Vec<Expense>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, amount, category, description, date FROM expense
                 ORDER BY date DESC, id DESC",
            )?
            .query_map([], map_expense_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect()
    }

    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .lock()?
            .prepare("SELECT id, amount, category, description, date FROM expense WHERE id = :id")?
            .query_row(&[(":id", &id)], map_expense_row)?;

        Ok(expense)
    }

    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is a SQL error.
    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let expense = self
            .lock()?
            .prepare(
                "INSERT INTO expense (amount, category, description, date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, amount, category, description, date",
            )?
            .query_row(
                (
                    builder.amount,
                    builder.category,
                    builder.description,
                    builder.date,
                ),
                map_expense_row,
            )?;

        Ok(expense)
    }

    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingExpense] if `id` does not refer to a valid expense,
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(&mut self, id: ExpenseId, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let result = self
            .lock()?
            .prepare(
                "UPDATE expense SET amount = ?1, category = ?2, description = ?3, date = ?4
                 WHERE id = ?5
                 RETURNING id, amount, category, description, date",
            )?
            .query_row(
                (
                    builder.amount,
                    builder.category,
                    builder.description,
                    builder.date,
                    id,
                ),
                map_expense_row,
            );

        match result {
            Ok(expense) => Ok(expense),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::UpdateMissingExpense),
            Err(error) => Err(error.into()),
        }
    }

    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingExpense] if `id` does not refer to a valid expense,
    /// - [Error::DatabaseLockError] if the database lock is poisoned,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM expense WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingExpense);
        }

        Ok(())
    }
}

/// Create the expense table.
///
/// Categories are restricted to the fixed category labels and amounts are
/// stored as decimal text.
///
/// # Errors
/// Returns an error if the table or its index could not be created.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount TEXT NOT NULL,
            category TEXT NOT NULL CHECK (category IN ({categories})),
            description TEXT NOT NULL,
            date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        categories = sql_category_list()
    ))
}

fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        date: row.get(4)?,
    })
}
