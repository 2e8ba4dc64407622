//! Bank error types for rate validation and conversion.

use moneybank_shared::types::Currency;
use thiserror::Error;

/// Result type alias using `BankError`.
pub type BankResult<T> = Result<T, BankError>;

/// Why a currency was refused as the key of an exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCurrencyReason {
    /// The currency is the bank's pivot, which is implicitly 1.
    PivotCurrency,
    /// The currency code is not one the system knows about.
    UnsupportedCurrency,
}

impl std::fmt::Display for InvalidCurrencyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::PivotCurrency => "Can't add an exchange rate with the pivot currency",
            Self::UnsupportedCurrency => "Can't add an exchange rate with invalid currency",
        })
    }
}

/// Errors that can occur while building a bank or converting money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// A rate was added for a currency that cannot carry one.
    #[error("{0}")]
    InvalidExchangeCurrency(InvalidCurrencyReason),

    /// Exchange rate must be positive.
    #[error("The exchange rate should be greater than 0")]
    InvalidExchangeRate,

    /// No rate is known for one side of the requested pair.
    #[error("{from}->{to}")]
    MissingExchangeRate {
        /// Currency the caller converts from.
        from: Currency,
        /// Currency the caller converts to.
        to: Currency,
    },

    /// The converted amount does not fit in a `Decimal`.
    #[error("Conversion overflow for {from}->{to}")]
    ConversionOverflow {
        /// Currency the caller converts from.
        from: Currency,
        /// Currency the caller converts to.
        to: Currency,
    },
}

impl BankError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidExchangeCurrency(_) => "INVALID_EXCHANGE_CURRENCY",
            Self::InvalidExchangeRate => "INVALID_EXCHANGE_RATE",
            Self::MissingExchangeRate { .. } => "MISSING_EXCHANGE_RATE",
            Self::ConversionOverflow { .. } => "CONVERSION_OVERFLOW",
        }
    }

    /// Returns true if the error comes from adding a rate rather than converting.
    #[must_use]
    pub const fn is_rate_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidExchangeCurrency(_) | Self::InvalidExchangeRate
        )
    }
}
