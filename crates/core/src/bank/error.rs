//! Bank error types.

use polymoney_shared::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::exchange::CurrencyPair;

/// Errors raised by the exchange rate registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No direct rate is registered for the pair.
    ///
    /// The message is the bare pair, e.g. `EUR->Kalganid`.
    #[error("{0}")]
    MissingExchangeRate(CurrencyPair),

    /// Rate must be positive.
    #[error("Exchange rate for {pair} must be positive, got {rate}")]
    InvalidExchangeRate {
        /// Pair the rate was registered for.
        pair: CurrencyPair,
        /// Rejected rate.
        rate: Decimal,
    },

    /// Converted amount is not representable.
    #[error(transparent)]
    Money(#[from] MoneyError),
}
