//! A non-negative decimal amount of money.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::ValidationError;

/// The amount of money spent on an expense.
///
/// Amounts are decimal so that sums of currency values are exact, e.g.,
/// 0.10 + 0.20 is exactly 0.30. Amounts are never negative, never have
/// fractions of a cent and are at most [Amount::MAX_DOLLARS], so summing any
/// realistic number of them cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// A zero amount.
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// The largest amount of a single expense in whole dollars.
    pub const MAX_DOLLARS: i64 = 1_000_000_000;

    /// Create an amount.
    ///
    /// Trailing zeros do not count as decimal places, so 1.500 is accepted.
    ///
    /// # Errors
    ///
    /// Returns a:
    /// - [ValidationError::NegativeAmount] if `value` is less than zero,
    /// - [ValidationError::TooManyDecimalPlaces] if `value` has fractions of a cent,
    /// - or [ValidationError::AmountTooLarge] if `value` is above [Amount::MAX_DOLLARS].
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(ValidationError::NegativeAmount(value))
        } else if value.normalize().scale() > 2 {
            Err(ValidationError::TooManyDecimalPlaces(value))
        } else if value > Decimal::from(Self::MAX_DOLLARS) {
            Err(ValidationError::AmountTooLarge(value))
        } else {
            Ok(Self(value))
        }
    }

    /// The decimal value of the amount.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    /// Parse plain decimal text such as "12", "12.5" or "-3.00".
    ///
    /// Signs other than a leading minus, exponents and digit separators are
    /// rejected as [ValidationError::InvalidAmount].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ValidationError::InvalidAmount(trimmed.to_owned());

        let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
        let is_plain_decimal = unsigned.chars().any(|c| c.is_ascii_digit())
            && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
            && unsigned.matches('.').count() <= 1;
        if !is_plain_decimal {
            return Err(invalid());
        }

        let value = Decimal::from_str(trimmed).map_err(|_| invalid())?;

        Amount::new(value)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Amounts are stored as TEXT so that the decimal value survives the round trip
// through SQLite unchanged.
impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::expense::{Amount, ValidationError};

    #[test]
    fn new_accepts_zero() {
        assert_eq!(Amount::new(dec!(0)), Ok(Amount::ZERO));
    }

    #[test]
    fn new_rejects_negative_value() {
        assert_eq!(
            Amount::new(dec!(-0.01)),
            Err(ValidationError::NegativeAmount(dec!(-0.01)))
        );
    }

    #[test]
    fn parses_decimal_string() {
        let amount: Amount = " 12.30 ".parse().unwrap();

        assert_eq!(amount.value(), dec!(12.30));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        let result = "twelve".parse::<Amount>();

        assert_eq!(
            result,
            Err(ValidationError::InvalidAmount("twelve".to_owned()))
        );
    }

    #[test]
    fn new_rejects_fractions_of_a_cent() {
        assert_eq!(
            Amount::new(dec!(1.005)),
            Err(ValidationError::TooManyDecimalPlaces(dec!(1.005)))
        );
    }

    #[test]
    fn new_ignores_trailing_zeros_when_counting_decimal_places() {
        let amount = Amount::new(dec!(1.500)).unwrap();

        assert_eq!(amount.value(), dec!(1.5));
    }

    #[test]
    fn new_rejects_amount_above_maximum() {
        let too_large = Decimal::from(Amount::MAX_DOLLARS) + dec!(0.01);

        assert_eq!(
            Amount::new(too_large),
            Err(ValidationError::AmountTooLarge(too_large))
        );
        assert_eq!(
            Amount::new(Decimal::MAX),
            Err(ValidationError::AmountTooLarge(Decimal::MAX))
        );
        assert!(Amount::new(Decimal::from(Amount::MAX_DOLLARS)).is_ok());
    }

    #[test]
    fn parse_rejects_digit_separators_and_exponents() {
        for text in ["1_000", "1e3", "+5", "1.2.3", ".", "-"] {
            assert_eq!(
                text.parse::<Amount>(),
                Err(ValidationError::InvalidAmount(text.to_owned())),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_decimal_string() {
        let amount = Amount::new(dec!(0.30)).unwrap();

        let json = serde_json::to_string(&amount).unwrap();

        assert_eq!(json, "\"0.30\"");
    }

    #[test]
    fn deserialize_rejects_negative_value() {
        let result = serde_json::from_str::<Amount>("\"-1.00\"");

        assert!(result.is_err());
    }
}
