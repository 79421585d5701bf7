//! Defines the core data model for expenses.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    database_id::ExpenseId,
    expense::{Amount, Category},
};

/// A single recorded spend event.
///
/// To create a new `Expense`, use [Expense::build] and pass the builder to an
/// [ExpenseStore](crate::expense::ExpenseStore), which assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense, assigned by the store.
    pub id: ExpenseId,
    /// How much was spent.
    pub amount: Amount,
    /// What the money was spent on.
    pub category: Category,
    /// A text description of the expense. May be empty.
    pub description: String,
    /// When the expense happened.
    pub date: Date,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(amount: Amount, category: Category, date: Date) -> ExpenseBuilder {
        ExpenseBuilder {
            amount,
            category,
            description: String::new(),
            date,
        }
    }
}

/// The fields of an [Expense] that has not been stored yet.
///
/// Also used as the full replacement record when updating an expense.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// let builder = Expense::build(
///         "45.99".parse().unwrap(),
///         Category::FoodAndDining,
///         date!(2025 - 01 - 15),
///     )
///     .description("Coffee with friends");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    /// How much was spent.
    pub amount: Amount,
    /// What the money was spent on.
    pub category: Category,
    /// A text description of the expense.
    pub description: String,
    /// When the expense happened.
    pub date: Date,
}

impl ExpenseBuilder {
    /// Set the description for the expense.
    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.description);
        self
    }

    /// Attach `id` to the builder's fields.
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::expense::{Amount, Category, Expense};

    #[test]
    fn build_defaults_to_empty_description() {
        let builder = Expense::build(
            Amount::new(dec!(1.50)).unwrap(),
            Category::Travel,
            date!(2024 - 03 - 01),
        );

        assert_eq!(builder.description, "");
    }

    #[test]
    fn into_expense_keeps_fields() {
        let builder = Expense::build(
            Amount::new(dec!(9.99)).unwrap(),
            Category::Health,
            date!(2024 - 02 - 29),
        )
        .description("Vitamins");

        let expense = builder.clone().into_expense(7);

        assert_eq!(expense.id, 7);
        assert_eq!(expense.amount, builder.amount);
        assert_eq!(expense.category, builder.category);
        assert_eq!(expense.description, "Vitamins");
        assert_eq!(expense.date, builder.date);
    }
}
