//! Money arithmetic error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by `Money` arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Division by a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Operands are in different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Expected currency.
        expected: String,
        /// Actual currency.
        got: String,
    },

    /// Result does not fit in a `Decimal`.
    #[error("Arithmetic overflow")]
    Overflow,
}
