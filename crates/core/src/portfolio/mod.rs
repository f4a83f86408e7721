//! Portfolio aggregation and fail-slow evaluation.

pub mod error;
pub mod service;

#[cfg(test)]
mod props;

pub use error::PortfolioError;
pub use service::Portfolio;
