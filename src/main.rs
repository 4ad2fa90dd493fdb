mod cli;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use cold_wallet_checker::analyzer;
use cold_wallet_checker::config::Config;
use cold_wallet_checker::etherscan::EtherscanClient;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let client = EtherscanClient::new(&config)?;

    println!("[•] Fetching transaction history...");
    let history = client
        .fetch_transactions(&cli.address, &cli.api_key)
        .await
        .with_context(|| format!("failed to fetch transactions for {}", cli.address))?;

    let verdict = analyzer::analyze(&history, cli.months, Utc::now())
        .with_context(|| format!("failed to analyze activity of {}", cli.address))?;

    println!("\nAnalysis result:");
    println!("{verdict}");

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
