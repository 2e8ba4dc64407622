//! Pivot-currency exchange bank.
//!
//! This module implements currency conversion over a star-shaped rate graph:
//! - Exchange rates quoted against a single pivot currency
//! - One- and two-hop conversions through the pivot
//! - Rounding of converted amounts
//! - Error types for rate validation and conversion
//! - A builder for assembling a bank from a list of rates

pub mod builder;
pub mod conversion;
pub mod error;
pub mod exchange;

#[cfg(test)]
mod props;

pub use builder::BankBuilder;
pub use conversion::{CONVERSION_DECIMAL_PLACES, round_converted};
pub use error::{BankError, BankResult, InvalidCurrencyReason};
pub use exchange::Bank;
