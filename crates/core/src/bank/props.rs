//! Property-based tests for bank operations.
//!
//! - Rounding: converted amounts carry at most 4 decimal places
//! - Identity: converting into the same currency is exact
//! - Persistence: adding a rate never changes an existing bank
//! - Validation: pivot and non-positive rates are always rejected

use proptest::prelude::*;
use rust_decimal::Decimal;

use moneybank_shared::types::{Currency, Money};

use super::conversion::round_converted;
use super::error::{BankError, InvalidCurrencyReason};
use super::exchange::Bank;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate any amount, any sign, up to 10 decimal places.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate zero or negative rates.
fn non_positive_rate() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|v| Decimal::new(-v, 4))
}

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Any currency except EUR, used as the pivot below.
fn non_pivot_currency() -> impl Strategy<Value = Currency> {
    any_currency().prop_filter("must not be the EUR pivot", |c| *c != Currency::Eur)
}

/// EUR-pivot bank quoting every other currency at `rate`.
fn eur_bank(rate: Decimal) -> Bank {
    Bank::with_rates(
        Currency::Eur,
        Currency::ALL
            .into_iter()
            .filter(|c| *c != Currency::Eur)
            .map(|c| (c, rate)),
    )
    .unwrap()
}

/// Returns true if `value` has no digits past the 4th decimal place.
fn has_at_most_4_decimals(value: Decimal) -> bool {
    let scaled = value * Decimal::from(10000);
    scaled == scaled.round()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* currency, a new bank reports it as its pivot.
    #[test]
    fn prop_pivot_currency_is_kept(pivot in any_currency()) {
        prop_assert_eq!(Bank::new(pivot).pivot_currency(), pivot);
    }

    /// *For any* money, converting into its own currency returns it unchanged.
    #[test]
    fn prop_same_currency_is_identity(
        amount in any_amount(),
        currency in any_currency(),
        rate in positive_rate(),
    ) {
        let money = Money::new(amount, currency);
        let converted = eur_bank(rate).convert(&money, currency).unwrap();
        prop_assert_eq!(converted, money);
        prop_assert_eq!(converted.amount().scale(), amount.scale());
    }

    /// *For any* amount and rates, a two-hop result has at most 4 decimal places.
    #[test]
    fn prop_convert_rounds_to_4_decimals(
        amount in positive_amount(),
        source in non_pivot_currency(),
        target in non_pivot_currency(),
        source_rate in positive_rate(),
        target_rate in positive_rate(),
    ) {
        prop_assume!(source != target);
        let bank = Bank::with_rates(
            Currency::Eur,
            [(source, source_rate), (target, target_rate)],
        )
        .unwrap();

        let result = bank.convert(&Money::new(amount, source), target).unwrap();
        prop_assert_eq!(result.currency(), target);
        prop_assert!(
            has_at_most_4_decimals(result.amount()),
            "Result {} should have at most 4 decimal places",
            result.amount()
        );
    }

    /// *For any* pivot amount, converting out of the pivot is the rounded product.
    #[test]
    fn prop_convert_from_pivot_is_rounded_product(
        amount in positive_amount(),
        target in non_pivot_currency(),
        rate in positive_rate(),
    ) {
        let result = eur_bank(rate)
            .convert(&Money::new(amount, Currency::Eur), target)
            .unwrap();
        prop_assert_eq!(result.amount(), round_converted(amount * rate));
    }

    /// *For any* inputs, conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        source in any_currency(),
        target in any_currency(),
        rate in positive_rate(),
    ) {
        let bank = eur_bank(rate);
        let money = Money::new(amount, source);
        prop_assert_eq!(bank.convert(&money, target), bank.convert(&money, target));
    }

    /// *For any* rates, adding or overwriting a rate leaves the old bank as it was.
    #[test]
    fn prop_add_rate_keeps_old_bank(
        currency in non_pivot_currency(),
        first in positive_rate(),
        second in positive_rate(),
    ) {
        let bank = Bank::new(Currency::Eur).add_rate(currency, first).unwrap();
        let snapshot = bank.clone();
        let updated = bank.add_rate(currency, second).unwrap();

        prop_assert_eq!(&bank, &snapshot);
        prop_assert_eq!(bank.rate(currency), Some(first));
        prop_assert_eq!(updated.rate(currency), Some(second));
    }

    /// *For any* rate, the pivot currency is refused.
    #[test]
    fn prop_pivot_rate_rejected(
        pivot in any_currency(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(
            Bank::new(pivot).add_rate(pivot, rate),
            Err(BankError::InvalidExchangeCurrency(InvalidCurrencyReason::PivotCurrency))
        );
    }

    /// *For any* zero or negative rate, the rate is refused.
    #[test]
    fn prop_non_positive_rate_rejected(
        currency in non_pivot_currency(),
        rate in non_positive_rate(),
    ) {
        prop_assert_eq!(
            Bank::new(Currency::Eur).add_rate(currency, rate),
            Err(BankError::InvalidExchangeRate)
        );
    }
}
