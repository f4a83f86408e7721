//! Application configuration management.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{Currency, Money};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Evaluation configuration.
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    /// Exchange rates to register with the bank.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
    /// Holdings that make up the portfolio.
    #[serde(default)]
    pub holdings: Vec<HoldingConfig>,
}

/// Evaluation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Currency the portfolio is evaluated in.
    #[serde(default = "default_target_currency")]
    pub target_currency: Currency,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
        }
    }
}

fn default_target_currency() -> Currency {
    Currency::from("USD")
}

/// A directed exchange rate (1 `from` = `rate` `to`).
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// Source currency code.
    pub from: Currency,
    /// Target currency code.
    pub to: Currency,
    /// Exchange rate.
    pub rate: Decimal,
}

/// A single portfolio holding.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingConfig {
    /// Amount held.
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
}

impl HoldingConfig {
    /// Converts the holding into a `Money` value.
    #[must_use]
    pub fn to_money(&self) -> Money {
        Money::new(self.amount, &self.currency)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false));

        with_environment(config).build()?.try_deserialize()
    }

    /// Builds configuration from an in-memory TOML document.
    ///
    /// Environment overrides still apply on top of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or deserialized.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let config = Config::builder().add_source(File::from_str(document, FileFormat::Toml));

        with_environment(config).build()?.try_deserialize()
    }

    /// Returns the configured holdings as `Money` values, in file order.
    #[must_use]
    pub fn holdings(&self) -> Vec<Money> {
        self.holdings.iter().map(HoldingConfig::to_money).collect()
    }
}

fn with_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(Environment::with_prefix("POLYMONEY").separator("__"))
}
