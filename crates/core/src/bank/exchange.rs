//! The pivot-currency bank.
//!
//! Every stored rate is quoted against one pivot currency: a rate `r` for `C`
//! means 1 pivot = `r` units of `C`. Conversions between two non-pivot
//! currencies go through the pivot.

use std::collections::HashMap;
use std::sync::Arc;

use moneybank_shared::RatesConfig;
use moneybank_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use super::conversion;
use super::error::{BankError, BankResult, InvalidCurrencyReason};

/// Exchange rates against a pivot currency.
///
/// A `Bank` never changes once built. [`Bank::add_rate`] returns a new bank
/// and leaves the receiver, and every clone of it, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pivot_currency: Currency,
    // Never contains the pivot; every value is > 0.
    rates: Arc<HashMap<Currency, Decimal>>,
}

impl Bank {
    /// Creates a bank with no rates.
    #[must_use]
    pub fn new(pivot_currency: Currency) -> Self {
        Self::from_validated(pivot_currency, HashMap::new())
    }

    /// Creates a bank from `(currency, rate)` pairs, applied in order.
    ///
    /// Fails with the first error [`Bank::add_rate`] reports.
    pub fn with_rates<I>(pivot_currency: Currency, rates: I) -> BankResult<Self>
    where
        I: IntoIterator<Item = (Currency, Decimal)>,
    {
        rates
            .into_iter()
            .try_fold(Self::new(pivot_currency), |bank, (currency, rate)| {
                bank.add_rate(currency, rate)
            })
    }

    /// Creates a bank from configuration, validating every currency code.
    pub fn from_config(config: &RatesConfig) -> BankResult<Self> {
        config
            .rates
            .iter()
            .try_fold(Self::new(config.pivot), |bank, (code, rate)| {
                bank.add_rate_for_code(code, *rate)
            })
    }

    fn from_validated(pivot_currency: Currency, rates: HashMap<Currency, Decimal>) -> Self {
        Self {
            pivot_currency,
            rates: Arc::new(rates),
        }
    }

    /// Returns a new bank with `currency` quoted at `rate` units per pivot.
    ///
    /// An existing rate for `currency` is replaced.
    ///
    /// # Errors
    ///
    /// - [`BankError::InvalidExchangeCurrency`] if `currency` is the pivot.
    /// - [`BankError::InvalidExchangeRate`] if `rate` is not greater than 0.
    pub fn add_rate(&self, currency: Currency, rate: Decimal) -> BankResult<Self> {
        if currency == self.pivot_currency {
            return Err(BankError::InvalidExchangeCurrency(
                InvalidCurrencyReason::PivotCurrency,
            ));
        }
        if rate <= Decimal::ZERO {
            return Err(BankError::InvalidExchangeRate);
        }

        let mut rates = HashMap::clone(&self.rates);
        rates.insert(currency, rate);
        Ok(Self::from_validated(self.pivot_currency, rates))
    }

    /// Same as [`Bank::add_rate`], for a currency given by its ISO code.
    pub fn add_rate_for_code(&self, code: &str, rate: Decimal) -> BankResult<Self> {
        let currency = code.parse::<Currency>().map_err(|_| {
            BankError::InvalidExchangeCurrency(InvalidCurrencyReason::UnsupportedCurrency)
        })?;
        self.add_rate(currency, rate)
    }

    /// The currency every rate is quoted against.
    #[must_use]
    pub const fn pivot_currency(&self) -> Currency {
        self.pivot_currency
    }

    /// Units of `currency` per 1 pivot, if known. The pivot itself is 1.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Option<Decimal> {
        if currency == self.pivot_currency {
            return Some(Decimal::ONE);
        }
        self.rates.get(&currency).copied()
    }

    /// Returns true if money can be converted to and from `currency`.
    #[must_use]
    pub fn supports(&self, currency: Currency) -> bool {
        currency == self.pivot_currency || self.rates.contains_key(&currency)
    }

    /// Converts `money` into `target`, rounded to 4 decimal places.
    ///
    /// Converting into the money's own currency returns it as is, unrounded.
    ///
    /// # Errors
    ///
    /// [`BankError::MissingExchangeRate`] names the requested pair when either
    /// side has no rate, [`BankError::ConversionOverflow`] if the amount does
    /// not fit in a `Decimal`.
    pub fn convert(&self, money: &Money, target: Currency) -> BankResult<Money> {
        let source = money.currency();
        if source == target {
            return Ok(*money);
        }

        let missing = || BankError::MissingExchangeRate {
            from: source,
            to: target,
        };
        let overflow = || BankError::ConversionOverflow {
            from: source,
            to: target,
        };

        let pivot_amount = if source == self.pivot_currency {
            money.amount()
        } else {
            let rate = self.rates.get(&source).ok_or_else(missing)?;
            conversion::to_pivot(money.amount(), *rate).ok_or_else(overflow)?
        };

        let amount = if target == self.pivot_currency {
            pivot_amount
        } else {
            let rate = self.rates.get(&target).ok_or_else(missing)?;
            conversion::from_pivot(pivot_amount, *rate).ok_or_else(overflow)?
        };

        Ok(Money::new(conversion::round_converted(amount), target))
    }
}
