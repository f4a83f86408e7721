//! Polymoney evaluator
//!
//! Loads exchange rates and holdings from configuration and reports the
//! portfolio's total value in the configured target currency.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polymoney_core::{Bank, ExchangeRate, Portfolio, PortfolioError};
use polymoney_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polymoney=info,polymoney_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let bank = Bank::from_rates(
        config
            .rates
            .iter()
            .map(|r| ExchangeRate::new(&r.from, &r.to, r.rate)),
    )
    .context("Invalid exchange rate in configuration")?;
    info!(rates = bank.len(), "Exchange rates loaded");

    let portfolio: Portfolio = config.holdings().into_iter().collect();
    info!(holdings = portfolio.len(), "Portfolio loaded");

    let target = &config.evaluation.target_currency;
    match portfolio.evaluate(&bank, target) {
        Ok(total) => {
            info!(%total, "Portfolio evaluated");
            Ok(())
        }
        Err(err @ PortfolioError::MissingExchangeRates(_)) => {
            for pair in err.missing_pairs() {
                error!(%pair, "Missing exchange rate");
            }
            Err(err).with_context(|| format!("Failed to evaluate portfolio in {target}"))
        }
        Err(err) => Err(err).context("Failed to evaluate portfolio"),
    }
}
