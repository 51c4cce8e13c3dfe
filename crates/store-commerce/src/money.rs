//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues in price and total calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreError;

/// Currencies the storefront settles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g.,
/// cents for USD), always with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// A zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Checked addition; errors on overflow or currency mismatch.
    pub fn checked_add(&self, other: Money) -> Result<Money, StoreError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount_cents
            .checked_add(other.amount_cents)
            .ok_or(StoreError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Checked subtraction; errors on overflow or currency mismatch.
    pub fn checked_sub(&self, other: Money) -> Result<Money, StoreError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount_cents
            .checked_sub(other.amount_cents)
            .ok_or(StoreError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Checked multiplication by a quantity.
    pub fn checked_mul(&self, factor: i64) -> Result<Money, StoreError> {
        let amount = self
            .amount_cents
            .checked_mul(factor)
            .ok_or(StoreError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// The portion of this amount covered by a percentage, rounded
    /// down to whole minor units. Used for percent-off discounts.
    pub fn percent(&self, percent: i64) -> Result<Money, StoreError> {
        let scaled = self
            .amount_cents
            .checked_mul(percent)
            .ok_or(StoreError::Overflow)?;
        Ok(Money::new(scaled / 100, self.currency))
    }

    /// Format for display, e.g. "$249.00".
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            abs / 100,
            abs % 100
        )
    }

    fn require_same_currency(&self, other: Money) -> Result<(), StoreError> {
        if self.currency != other.currency {
            return Err(StoreError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(250, Currency::USD);
        assert_eq!(a.checked_add(b).unwrap().amount_cents, 1250);
    }

    #[test]
    fn test_currency_mismatch() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(250, Currency::EUR);
        assert!(matches!(
            a.checked_add(b),
            Err(StoreError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_overflow() {
        let a = Money::new(i64::MAX, Currency::USD);
        let b = Money::new(1, Currency::USD);
        assert!(matches!(a.checked_add(b), Err(StoreError::Overflow)));
    }

    #[test]
    fn test_percent_rounds_down() {
        let price = Money::new(999, Currency::USD);
        // 15% of 999 = 149.85, rounds down to 149
        assert_eq!(price.percent(15).unwrap().amount_cents, 149);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(24_900, Currency::USD).display(), "$249.00");
        assert_eq!(Money::new(-505, Currency::USD).display(), "-$5.05");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
