//! Shared types, errors, and configuration for Polymoney.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency types with decimal precision
//! - Money arithmetic error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, Money};
