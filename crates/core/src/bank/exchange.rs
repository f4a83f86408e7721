//! Exchange rate types.

use std::fmt;

use polymoney_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered currency pair used as the rate table key.
///
/// `EUR->USD` and `USD->EUR` are distinct pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Source currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    #[must_use]
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns true if both sides are the same currency.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Currency pair the rate applies to.
    pub pair: CurrencyPair,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>, rate: Decimal) -> Self {
        Self {
            pair: CurrencyPair::new(from, to),
            rate,
        }
    }
}
