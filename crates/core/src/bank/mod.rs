//! Exchange rate registry and currency conversion.

pub mod error;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use error::BankError;
pub use exchange::{CurrencyPair, ExchangeRate};
pub use service::Bank;
