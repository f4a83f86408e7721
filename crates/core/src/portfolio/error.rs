//! Portfolio error types.

use polymoney_shared::MoneyError;
use thiserror::Error;

use crate::bank::{BankError, CurrencyPair};

/// Errors raised while evaluating a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// One or more holdings had no rate into the target currency.
    ///
    /// Holds one pair per failing holding, in add-order, duplicates kept.
    #[error("Missing exchange rate(s):[{}]", join_pairs(.0))]
    MissingExchangeRates(Vec<CurrencyPair>),

    /// Conversion failed for a reason other than a missing rate.
    #[error(transparent)]
    Bank(#[from] BankError),

    /// Running total is not representable.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl PortfolioError {
    /// Returns the missing pairs, or an empty slice for other errors.
    #[must_use]
    pub fn missing_pairs(&self) -> &[CurrencyPair] {
        match self {
            Self::MissingExchangeRates(pairs) => pairs,
            Self::Bank(_) | Self::Money(_) => &[],
        }
    }
}

fn join_pairs(pairs: &[CurrencyPair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
