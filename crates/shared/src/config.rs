//! Application configuration management.
//!
//! Sources are applied in order, later ones winning per key:
//! `config/default`, `config/{RUN_MODE}`, then `MONEYBANK__*` variables.
//! Rate keys are currency codes and are matched case-insensitively across
//! sources, since file keys keep their casing and environment keys do not.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Exchange rate table configuration.
    pub bank: RatesConfig,
}

/// Pivot currency and the rates expressed against it.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Currency every rate is quoted against.
    pub pivot: Currency,
    /// Upper-cased currency code to rate (1 pivot = rate units of that currency).
    ///
    /// Codes stay as strings here; they are checked when the bank is built.
    pub rates: BTreeMap<String, Decimal>,
}

/// Environment variable prefix for overrides, e.g. `MONEYBANK__BANK__PIVOT`.
pub const ENV_PREFIX: &str = "MONEYBANK";

/// What a single source contributes. Every field is optional.
#[derive(Debug, Deserialize)]
struct Layer {
    #[serde(default)]
    bank: Option<BankLayer>,
}

#[derive(Debug, Deserialize)]
struct BankLayer {
    pivot: Option<Currency>,
    #[serde(default)]
    rates: BTreeMap<String, Decimal>,
}

impl Layer {
    fn read<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Loads configuration from the files in `config_dir` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed, if one source names the same
    /// currency twice, or if no source sets the pivot.
    pub fn load_from(config_dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, config_dir = %config_dir.display(), "Loading configuration");

        let file = |name: &str| {
            config::File::with_name(&config_dir.join(name).to_string_lossy()).required(false)
        };

        Self::merge([
            Layer::read(file("default"))?,
            Layer::read(file(&run_mode))?,
            Layer::read(config::Environment::with_prefix(ENV_PREFIX).separator("__"))?,
        ])
    }

    /// Parses configuration from a TOML string, without touching the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has the wrong shape.
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        Self::merge([Layer::read(config::File::from_str(
            document,
            config::FileFormat::Toml,
        ))?])
    }

    fn merge<I>(layers: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = Layer>,
    {
        let mut pivot = None;
        let mut rates = BTreeMap::new();

        for bank in layers.into_iter().filter_map(|layer| layer.bank) {
            pivot = bank.pivot.or(pivot);

            let mut seen = BTreeMap::new();
            for (key, rate) in bank.rates {
                let code = key.trim().to_uppercase();
                if let Some(previous) = seen.insert(code.clone(), key.clone()) {
                    return Err(config::ConfigError::Message(format!(
                        "Rate for {code} is set twice, as `{previous}` and `{key}`"
                    )));
                }
                rates.insert(code, rate);
            }
        }

        let pivot = pivot.ok_or_else(|| config::ConfigError::NotFound("bank.pivot".to_string()))?;
        Ok(Self {
            bank: RatesConfig { pivot, rates },
        })
    }
}
