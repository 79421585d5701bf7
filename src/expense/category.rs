//! The fixed set of expense categories.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::expense::ValidationError;

/// What an expense was for.
///
/// Categories are stored and displayed using their labels, e.g. "Food & Dining".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, restaurants and takeaways.
    #[default]
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    /// Fuel, public transport, parking, etc.
    #[serde(rename = "Transportation")]
    Transportation,
    /// Clothes, electronics and other purchases.
    #[serde(rename = "Shopping")]
    Shopping,
    /// Movies, games, events and subscriptions.
    #[serde(rename = "Entertainment")]
    Entertainment,
    /// Rent, power, internet, phone, etc.
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    /// Doctor visits, medicine and fitness.
    #[serde(rename = "Health")]
    Health,
    /// Flights, accommodation and holidays.
    #[serde(rename = "Travel")]
    Travel,
    /// Anything that does not fit the other categories.
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category in the order they are offered to the user.
    pub const ALL: [Category; 8] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Health,
        Category::Travel,
        Category::Other,
    ];

    /// The human readable label, which is also the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ValidationError::InvalidCategory(s.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// The SQL list of every category label, for use in a CHECK constraint.
pub(crate) fn sql_category_list() -> String {
    Category::ALL
        .iter()
        .map(|category| format!("'{}'", category.label()))
        .collect::<Vec<_>>()
        .join(", ")
}
