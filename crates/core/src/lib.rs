//! Core business logic for Moneybank.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Rate validation, pivot-relative conversion and rounding live here.
//!
//! # Modules
//!
//! - `bank` - Exchange rates against a pivot currency and conversion

pub mod bank;

pub use bank::{Bank, BankBuilder, BankError, BankResult};
