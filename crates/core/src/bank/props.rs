//! Property-based tests for currency conversion.

use polymoney_shared::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::BankError;
use super::service::Bank;

/// Strategy to generate amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate short currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same-currency conversion returns the input unchanged, with no rates registered.
    #[test]
    fn prop_identity_conversion(amount in amount(), code in currency_code()) {
        let bank = Bank::new();
        let money = Money::new(amount, code.as_str());
        prop_assert_eq!(bank.convert(&money, code.as_str()).unwrap(), money);
    }

    /// Conversion multiplies the amount by the registered rate.
    #[test]
    fn prop_convert_multiplies_by_rate(
        amount in amount(),
        rate in positive_rate(),
        from in currency_code(),
        to in currency_code(),
    ) {
        prop_assume!(from != to);
        let mut bank = Bank::new();
        bank.add_exchange_rate(from.as_str(), to.as_str(), rate).unwrap();

        let converted = bank.convert(&Money::new(amount, from.as_str()), to.as_str()).unwrap();
        prop_assert_eq!(converted, Money::new(amount * rate, to.as_str()));
    }

    /// Registering a rate never makes the reverse direction convertible.
    #[test]
    fn prop_no_reciprocal(
        amount in amount(),
        rate in positive_rate(),
        from in currency_code(),
        to in currency_code(),
    ) {
        prop_assume!(from != to);
        let mut bank = Bank::new();
        bank.add_exchange_rate(from.as_str(), to.as_str(), rate).unwrap();

        let result = bank.convert(&Money::new(amount, to.as_str()), from.as_str());
        prop_assert!(matches!(result, Err(BankError::MissingExchangeRate(_))));
    }
}
