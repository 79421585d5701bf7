//! Checks the raw form input for an expense and turns it into an [ExpenseBuilder].

use rust_decimal::Decimal;
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::expense::{Amount, Category, Expense, ExpenseBuilder};

/// The ways the submitted fields of an expense can be invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The amount could not be read as a number.
    #[error("\"{0}\" is not a valid amount, enter a number such as 12.50")]
    InvalidAmount(String),

    /// The amount was below zero.
    #[error("the amount {0} is negative, amounts must be zero or more")]
    NegativeAmount(Decimal),

    /// The amount had fractions of a cent.
    #[error("the amount {0} has more than two decimal places")]
    TooManyDecimalPlaces(Decimal),

    /// The amount was above the largest amount a single expense may have.
    #[error(
        "the amount {0} is too large, amounts must be at most {max}",
        max = Amount::MAX_DOLLARS
    )]
    AmountTooLarge(Decimal),

    /// The date was not a real calendar date in the format YYYY-MM-DD.
    #[error("\"{0}\" is not a valid date, use the format YYYY-MM-DD")]
    InvalidDate(String),

    /// The category is not one of the fixed categories.
    #[error("\"{0}\" is not a known category")]
    InvalidCategory(String),
}

/// The form data for creating or updating an expense.
///
/// All fields are kept as text so that bad or missing input is reported with
/// a [ValidationError] instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    /// The amount spent, e.g. "45.99".
    #[serde(default)]
    pub amount: String,
    /// The category label, e.g. "Food & Dining".
    #[serde(default)]
    pub category: String,
    /// Text describing the expense.
    #[serde(default)]
    pub description: Option<String>,
    /// The date of the expense in the format YYYY-MM-DD.
    #[serde(default)]
    pub date: String,
}

impl ExpenseForm {
    /// Parse and check every field.
    ///
    /// Fields are checked in the order amount, date, category and the first
    /// error found is returned. The description is trimmed of surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [ValidationError] describing the first invalid field.
    pub fn validate(self) -> Result<ExpenseBuilder, ValidationError> {
        let amount: Amount = self.amount.parse()?;
        let date = parse_date(&self.date)?;
        let category: Category = self.category.parse()?;
        let description = self.description.as_deref().unwrap_or_default().trim();

        Ok(Expense::build(amount, category, date).description(description))
    }
}

/// Parse a date in the format YYYY-MM-DD, as sent by HTML date inputs.
pub(crate) fn parse_date(text: &str) -> Result<Date, ValidationError> {
    let text = text.trim();

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDate(text.to_owned()))
}
