//! Moneybank converter
//!
//! Converts an amount between two currencies using the configured rates.
//!
//! Usage: convert <AMOUNT> <FROM> <TO>

use anyhow::{Context, bail};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneybank_core::Bank;
use moneybank_shared::AppConfig;
use moneybank_shared::types::{Currency, Money};

/// A parsed conversion request.
#[derive(Debug, PartialEq, Eq)]
struct Request {
    money: Money,
    target: Currency,
}

fn parse_args<I>(args: I) -> anyhow::Result<Request>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let [amount, from, to] = args.as_slice() else {
        bail!("usage: convert <AMOUNT> <FROM> <TO>");
    };

    let amount: Decimal = amount
        .parse()
        .with_context(|| format!("Invalid amount: {amount}"))?;
    let from: Currency = from.parse()?;
    let target: Currency = to.parse()?;

    Ok(Request {
        money: Money::new(amount, from),
        target,
    })
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "convert=info,moneybank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request = parse_args(std::env::args().skip(1))?;

    let config = AppConfig::load().context("Failed to load configuration")?;
    let bank = Bank::from_config(&config.bank).context("Invalid exchange rate configuration")?;
    info!(
        pivot = %bank.pivot_currency(),
        rates = config.bank.rates.len(),
        "Bank configured"
    );

    debug!(
        amount = %request.money.amount(),
        from = %request.money.currency(),
        to = %request.target,
        "Converting"
    );
    let converted = bank
        .convert(&request.money, request.target)
        .context("Conversion failed")?;

    println!("{} {}", converted.amount(), converted.currency());
    Ok(())
}
