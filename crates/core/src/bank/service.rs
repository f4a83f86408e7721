//! Exchange rate registry and conversion.
//!
//! Lookups are exact on the ordered pair. Reciprocal and multi-hop
//! (triangulated) rates are never inferred.

use std::collections::HashMap;

use polymoney_shared::{Currency, Money};
use rust_decimal::Decimal;
use tracing::debug;

use super::error::BankError;
use super::exchange::{CurrencyPair, ExchangeRate};

/// Registry of directed exchange rates.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: HashMap<CurrencyPair, Decimal>,
}

impl Bank {
    /// Creates a bank with an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank from a list of rates. Later rates for the same
    /// pair overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidExchangeRate` on the first non-positive rate.
    pub fn from_rates<I>(rates: I) -> Result<Self, BankError>
    where
        I: IntoIterator<Item = ExchangeRate>,
    {
        let mut bank = Self::new();
        for ExchangeRate { pair, rate } in rates {
            bank.add_exchange_rate(pair.from, pair.to, rate)?;
        }
        Ok(bank)
    }

    /// Registers the rate for `from -> to`, replacing any previous rate.
    ///
    /// Only the given direction is registered.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidExchangeRate` if `rate` is not positive;
    /// the table is left unchanged.
    pub fn add_exchange_rate(
        &mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: Decimal,
    ) -> Result<(), BankError> {
        let pair = CurrencyPair::new(from, to);
        if rate <= Decimal::ZERO {
            return Err(BankError::InvalidExchangeRate { pair, rate });
        }

        debug!(%pair, %rate, "Registering exchange rate");
        self.rates.insert(pair, rate);
        Ok(())
    }

    /// Returns the rate for `from -> to`, or `1` when both are the same.
    #[must_use]
    pub fn exchange_rate(&self, from: &Currency, to: &Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        self.rates.get(&CurrencyPair::new(from, to)).copied()
    }

    /// Converts `money` into `to`.
    ///
    /// Same-currency conversion uses a rate of `1` without a lookup.
    ///
    /// # Errors
    ///
    /// Returns `BankError::MissingExchangeRate` if no direct rate exists and
    /// `BankError::Money` if the converted amount overflows.
    pub fn convert(&self, money: &Money, to: impl Into<Currency>) -> Result<Money, BankError> {
        let to = to.into();
        let Some(rate) = self.exchange_rate(money.currency(), &to) else {
            let pair = CurrencyPair::new(money.currency(), to);
            debug!(%pair, "No exchange rate registered");
            return Err(BankError::MissingExchangeRate(pair));
        };

        let converted = Money::new(money.amount(), to).checked_times(rate)?;
        debug!(from = %money, to = %converted, %rate, "Converted");
        Ok(converted)
    }

    /// Returns every registered rate, in no particular order.
    pub fn rates(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        self.rates.iter().map(|(pair, rate)| ExchangeRate {
            pair: pair.clone(),
            rate: *rate,
        })
    }

    /// Returns the number of registered rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rate is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
