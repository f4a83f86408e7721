//! Portfolio aggregation and evaluation.
//!
//! Evaluation is fail-slow: every holding is converted before deciding
//! whether to fail, so a single error lists every missing rate.

use polymoney_shared::{Currency, Money};
use tracing::{debug, warn};

use super::error::PortfolioError;
use crate::bank::{Bank, BankError};

/// Collection of holdings in possibly mixed currencies.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    holdings: Vec<Money>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every given holding, in order. Duplicates are kept.
    pub fn add<I>(&mut self, moneys: I)
    where
        I: IntoIterator<Item = Money>,
    {
        self.holdings.extend(moneys);
    }

    /// Appends a single holding.
    pub fn push(&mut self, money: Money) {
        self.holdings.push(money);
    }

    /// Returns the holdings in add-order.
    #[must_use]
    pub fn holdings(&self) -> &[Money] {
        &self.holdings
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Evaluates the total value of the portfolio in `to`.
    ///
    /// An empty portfolio evaluates to zero. Every holding is attempted
    /// before an error is returned; missing rates take precedence over
    /// arithmetic overflow.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::MissingExchangeRates` listing one pair per
    /// holding that could not be converted, in add-order. Otherwise returns
    /// `PortfolioError::Bank` or `PortfolioError::Money` for the first
    /// conversion or summation that overflowed.
    pub fn evaluate(&self, bank: &Bank, to: impl Into<Currency>) -> Result<Money, PortfolioError> {
        let to = to.into();
        let mut total = Money::zero(&to);
        let mut missing = Vec::new();
        let mut failure: Option<PortfolioError> = None;

        for money in &self.holdings {
            let converted = match bank.convert(money, &to) {
                Ok(converted) => converted,
                Err(BankError::MissingExchangeRate(pair)) => {
                    missing.push(pair);
                    continue;
                }
                Err(err) => {
                    if failure.is_none() {
                        failure = Some(err.into());
                    }
                    continue;
                }
            };

            if failure.is_none() {
                match total.plus(&converted) {
                    Ok(sum) => total = sum,
                    Err(err) => failure = Some(err.into()),
                }
            }
        }

        if !missing.is_empty() {
            warn!(
                target_currency = %to,
                missing = missing.len(),
                holdings = self.holdings.len(),
                "Portfolio evaluation failed"
            );
            return Err(PortfolioError::MissingExchangeRates(missing));
        }

        if let Some(err) = failure {
            warn!(target_currency = %to, error = %err, "Portfolio evaluation failed");
            return Err(err);
        }

        debug!(%total, holdings = self.holdings.len(), "Portfolio evaluated");
        Ok(total)
    }
}

impl Extend<Money> for Portfolio {
    fn extend<I: IntoIterator<Item = Money>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        let mut portfolio = Self::new();
        portfolio.add(iter);
        portfolio
    }
}
