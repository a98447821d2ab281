use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pixcharge::config::{AppConfig, ConfigResolver, ConfigSource, EnvSource};
use pixcharge::{EfiConnector, PixChargeService};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Create a Pix charge and print its QR code", long_about = None)]
struct Cli {
    /// Charge amount in BRL, e.g. 150.00
    #[arg(long)]
    amount: Decimal,

    /// Seconds until the charge expires
    #[arg(long, default_value_t = 3600)]
    expiration: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source: Arc<dyn ConfigSource> = Arc::new(EnvSource::new());
    let app = AppConfig::from_source(source.as_ref());

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pixcharge={}", app.log_level).into()),
        )
        .with(app.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!app.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Environment: {}", app.env);

    let service = PixChargeService::new(ConfigResolver::new(source), Arc::new(EfiConnector));

    let result = service
        .create_pix_charge(cli.amount, cli.expiration)
        .await
        .context("Failed to create Pix charge")?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
