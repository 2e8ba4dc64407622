//! Fluent construction of a [`Bank`].

use moneybank_shared::types::Currency;
use rust_decimal::Decimal;

use super::error::BankResult;
use super::exchange::Bank;

/// Collects a pivot and exchange rates, then builds a validated [`Bank`].
///
/// ```
/// use moneybank_core::bank::BankBuilder;
/// use moneybank_shared::types::Currency;
/// use rust_decimal_macros::dec;
///
/// let bank = BankBuilder::new(Currency::Eur)
///     .with_exchange_rate(dec!(1.2), Currency::Usd)
///     .build()
///     .unwrap();
/// assert_eq!(bank.rate(Currency::Usd), Some(dec!(1.2)));
/// ```
#[derive(Debug, Clone)]
pub struct BankBuilder {
    pivot_currency: Currency,
    rates: Vec<(Currency, Decimal)>,
}

impl BankBuilder {
    /// Starts a builder for a bank pivoting on `pivot_currency`.
    #[must_use]
    pub const fn new(pivot_currency: Currency) -> Self {
        Self {
            pivot_currency,
            rates: Vec::new(),
        }
    }

    /// Replaces the pivot currency.
    #[must_use]
    pub fn with_pivot_currency(mut self, pivot_currency: Currency) -> Self {
        self.pivot_currency = pivot_currency;
        self
    }

    /// Queues `rate` units of `currency` per 1 pivot. Validated on [`BankBuilder::build`].
    #[must_use]
    pub fn with_exchange_rate(mut self, rate: Decimal, currency: Currency) -> Self {
        self.rates.push((currency, rate));
        self
    }

    /// Builds the bank, applying queued rates in order.
    ///
    /// Fails with the first error [`Bank::add_rate`] reports.
    pub fn build(self) -> BankResult<Bank> {
        Bank::with_rates(self.pivot_currency, self.rates)
    }
}
