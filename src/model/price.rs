//! Product prices.
//!
//! Prices keep two fractional digits, like a `decimal(10,2)` column, and are
//! shown to operators rounded to whole units with `.` as the thousands
//! separator.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest representable price, `99999999.99`, in cents.
pub const MAX_CENTS: u64 = 9_999_999_999;

/// A non-negative amount held as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

/// Reasons a price string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// Nothing was entered.
    #[error("price is empty")]
    Empty,
    /// The text is not a decimal number.
    #[error("price must be a number")]
    NotNumeric,
    /// The number is below zero.
    #[error("price must be at least 0")]
    Negative,
    /// More than two fractional digits.
    #[error("price allows at most two decimals")]
    TooPrecise,
    /// Above [`MAX_CENTS`].
    #[error("price must not exceed 99999999.99")]
    TooLarge,
}

impl Price {
    /// Builds a price from cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::TooLarge`] above [`MAX_CENTS`].
    pub fn from_cents(cents: u64) -> Result<Self, PriceError> {
        if cents > MAX_CENTS {
            return Err(PriceError::TooLarge);
        }
        Ok(Self { cents })
    }

    /// Parses operator input such as `12500`, `19.9` or `0.99`.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] describing the first rule the input breaks.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(PriceError::Empty);
        }
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(PriceError::NotNumeric);
        }
        if negative && (whole.bytes().any(|b| b != b'0') || fraction.bytes().any(|b| b != b'0')) {
            return Err(PriceError::Negative);
        }
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise);
        }

        let whole = whole.trim_start_matches('0');
        // 99999999 is the widest whole part; anything longer is out of range.
        if whole.len() > 8 {
            return Err(PriceError::TooLarge);
        }
        let units: u64 =
            if whole.is_empty() { 0 } else { whole.parse().map_err(|_| PriceError::NotNumeric)? };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| PriceError::NotNumeric)? * 10,
            _ => fraction.parse().map_err(|_| PriceError::NotNumeric)?,
        };
        Self::from_cents(units * 100 + cents)
    }

    /// Amount in cents.
    #[must_use]
    pub fn cents(self) -> u64 {
        self.cents
    }

    /// Amount rounded half-up to whole units.
    #[must_use]
    pub fn rounded_units(self) -> u64 {
        (self.cents + 50) / 100
    }

    /// Display form: rounded, no decimals, `.` between thousands.
    #[must_use]
    pub fn formatted(self) -> String {
        let digits = self.rounded_units().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl TryFrom<String> for Price {
    type Error = PriceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(Price::parse("12500").unwrap().cents(), 1_250_000);
        assert_eq!(Price::parse("19.9").unwrap().cents(), 1990);
        assert_eq!(Price::parse(" 0.05 ").unwrap().cents(), 5);
        assert_eq!(Price::parse(".5").unwrap().cents(), 50);
        assert_eq!(Price::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("abc"), Err(PriceError::NotNumeric));
        assert_eq!(Price::parse("1.2.3"), Err(PriceError::NotNumeric));
        assert_eq!(Price::parse("."), Err(PriceError::NotNumeric));
        assert_eq!(Price::parse("-3"), Err(PriceError::Negative));
        assert_eq!(Price::parse("1.999"), Err(PriceError::TooPrecise));
        assert_eq!(Price::parse("100000000"), Err(PriceError::TooLarge));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(Price::parse("-0").unwrap().cents(), 0);
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(Price::parse("99999999.99").unwrap().cents(), MAX_CENTS);
        assert_eq!(Price::from_cents(MAX_CENTS + 1), Err(PriceError::TooLarge));
    }

    #[test]
    fn formats_with_thousands_separator() {
        assert_eq!(Price::parse("12500.40").unwrap().formatted(), "12.500");
        assert_eq!(Price::parse("999.50").unwrap().formatted(), "1.000");
        assert_eq!(Price::parse("1234567").unwrap().formatted(), "1.234.567");
        assert_eq!(Price::parse("12").unwrap().formatted(), "12");
        assert_eq!(Price::default().formatted(), "0");
    }

    #[test]
    fn serializes_as_decimal_string() {
        let price = Price::parse("7.5").unwrap();
        assert_eq!(price.to_string(), "7.50");
        let yaml = serde_yaml::to_string(&price).unwrap();
        assert!(yaml.contains("7.50"));
        let back: Price = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, price);
    }
}
