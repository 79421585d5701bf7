//! Summarises expenses by category and by calendar month.
//!
//! All functions are pure and sum amounts as decimals, so totals are exact.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, Duration, Month};

use crate::expense::{Category, Expense};

/// A year and month, represented by the first day of the month.
///
/// Ordering follows the calendar, never the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth(Date);

impl CalendarMonth {
    /// The calendar month that `date` falls in.
    pub fn containing(date: Date) -> Self {
        Self(date - Duration::days(i64::from(date.day()) - 1))
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        self.0
    }

    /// A short human label, e.g. "Jan 2024".
    pub fn label(&self) -> String {
        format!("{} {}", month_abbreviation(self.0.month()), self.0.year())
    }

    /// The month as "YYYY-MM", e.g. "2024-01".
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.0.year(), u8::from(self.0.month()))
    }
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// The amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category the total is for.
    pub category: Category,
    /// The sum of the amounts of the expenses in `category`.
    pub total: Decimal,
}

/// The amount spent in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// The month the total is for.
    pub month: CalendarMonth,
    /// The sum of the amounts of the expenses in `month`.
    pub total: Decimal,
}

/// The expenses in one calendar month along with their total.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// The month the expenses fall in.
    pub month: CalendarMonth,
    /// The sum of the amounts of `expenses`.
    pub total: Decimal,
    /// The expenses in the order they were given.
    pub expenses: Vec<Expense>,
}

/// Sum the expenses for each category.
///
/// Only categories that appear in `expenses` are included, in the order each
/// category first appears.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.category == expense.category)
        {
            Some(total) => total.total += expense.amount.value(),
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount.value(),
            }),
        }
    }

    totals
}

/// Sum the expenses for each calendar month, in ascending calendar order.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<CalendarMonth, Decimal> = BTreeMap::new();

    for expense in expenses {
        *totals
            .entry(CalendarMonth::containing(expense.date))
            .or_default() += expense.amount.value();
    }

    totals
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Split date-ordered expenses into runs of consecutive expenses in the same month.
///
/// The order of `expenses` is preserved, both between and within groups.
pub fn group_by_month(expenses: Vec<Expense>) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for expense in expenses {
        let month = CalendarMonth::containing(expense.date);

        match groups.last_mut() {
            Some(group) if group.month == month => {
                group.total += expense.amount.value();
                group.expenses.push(expense);
            }
            _ => groups.push(MonthGroup {
                month,
                total: expense.amount.value(),
                expenses: vec![expense],
            }),
        }
    }

    groups
}

/// The sum of the amounts of all `expenses`.
pub fn total_amount(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.amount.value()).sum()
}
