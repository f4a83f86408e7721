//! Property-based tests for portfolio evaluation.

use polymoney_shared::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::Portfolio;
use crate::bank::{Bank, CurrencyPair};

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate holdings across a fixed set of currencies.
fn holdings() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec(
        (positive_amount(), prop::sample::select(vec!["USD", "EUR", "KRW"]))
            .prop_map(|(amount, code)| Money::new(amount, code)),
        0..20,
    )
}

fn bank() -> Bank {
    let mut bank = Bank::new();
    bank.add_exchange_rate("EUR", "USD", dec!(1.2)).unwrap();
    bank.add_exchange_rate("USD", "KRW", dec!(1100)).unwrap();
    bank
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Evaluating twice yields identical results.
    #[test]
    fn prop_evaluate_is_idempotent(holdings in holdings()) {
        let bank = bank();
        let portfolio: Portfolio = holdings.into_iter().collect();
        prop_assert_eq!(
            portfolio.evaluate(&bank, "USD"),
            portfolio.evaluate(&bank, "USD")
        );
    }

    /// A single-currency portfolio sums to the plain total.
    #[test]
    fn prop_same_currency_sum(amounts in prop::collection::vec(positive_amount(), 0..20)) {
        let bank = Bank::new();
        let expected: Decimal = amounts.iter().copied().sum();
        let portfolio: Portfolio = amounts
            .into_iter()
            .map(|amount| Money::new(amount, "KRW"))
            .collect();
        prop_assert_eq!(
            portfolio.evaluate(&bank, "KRW").unwrap(),
            Money::new(expected, "KRW")
        );
    }

    /// Every foreign holding is reported once, in add-order.
    #[test]
    fn prop_every_missing_rate_is_reported(holdings in holdings()) {
        let bank = Bank::new();
        let expected: Vec<CurrencyPair> = holdings
            .iter()
            .filter(|money| money.currency() != "Kalganid")
            .map(|money| CurrencyPair::new(money.currency(), "Kalganid"))
            .collect();
        let portfolio: Portfolio = holdings.into_iter().collect();

        match portfolio.evaluate(&bank, "Kalganid") {
            Ok(total) => prop_assert!(expected.is_empty() && total.is_zero()),
            Err(err) => prop_assert_eq!(err.missing_pairs(), expected.as_slice()),
        }
    }
}
