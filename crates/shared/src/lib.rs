//! Shared types and configuration for Moneybank.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency value types with decimal precision
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, RatesConfig};
pub use types::{Currency, Money, UnknownCurrency};
