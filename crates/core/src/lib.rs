//! Core business logic for Polymoney.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `bank` - Exchange rate registry and currency conversion
//! - `portfolio` - Holdings aggregation and evaluation

pub mod bank;
pub mod portfolio;

pub use bank::{Bank, BankError, CurrencyPair, ExchangeRate};
pub use portfolio::{Portfolio, PortfolioError};
