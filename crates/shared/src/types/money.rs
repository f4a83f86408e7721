//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::borrow::Borrow;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Represents a monetary amount with currency.
///
/// Values are immutable: every operation returns a new `Money`.
/// Equality compares the amount numerically, so `12.0 USD == 12 USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Currency code (e.g., "USD", "KRW").
///
/// Codes are not checked against ISO 4217; any string is accepted and
/// comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies the amount by `factor`, keeping the currency.
    ///
    /// No rounding is applied.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `Decimal`. Use `checked_times`
    /// when the operands are not known to be small.
    #[must_use]
    pub fn times(&self, factor: Decimal) -> Self {
        Self {
            amount: self.amount * factor,
            currency: self.currency.clone(),
        }
    }

    /// Multiplies the amount by `factor`, keeping the currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the product is not representable.
    pub fn checked_times(&self, factor: Decimal) -> MoneyResult<Self> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Divides the amount by `divisor`, keeping the currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::DivisionByZero` if `divisor` is zero and
    /// `MoneyError::Overflow` if the quotient is not representable.
    pub fn divide(&self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn plus(&self, other: &Self) -> MoneyResult<Self> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency.to_string(),
                got: other.currency.to_string(),
            });
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency.clone(),
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&Currency> for Currency {
    fn from(currency: &Currency) -> Self {
        currency.clone()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Currency {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
