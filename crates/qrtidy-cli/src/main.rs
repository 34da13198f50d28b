use anyhow::Context;
use clap::{Parser, Subcommand};
use qrtidy_core::{classify, describe, AppConfig, RecordFields};
use qrtidy_lookup::ProductResolver;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "qrtidy")]
#[command(about = "Classify scanned barcodes and look up product metadata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show how a scanned code is classified. No network access.
    Classify {
        /// Decoded scan value; two-tier book codes as `ISBN-JAN`.
        code: String,
    },
    /// Resolve a scanned code and print the product metadata as JSON.
    Lookup { code: String },
    /// Resolve a scanned code and print the item record fields as JSON.
    Record { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Classify { code } => {
            init_tracing("info")?;
            println!("{}", classification_report(&code)?);
        }
        Commands::Lookup { code } => {
            let resolver = build_resolver()?;
            match resolver.lookup(&code).await {
                Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
                None => eprintln!("no product data found for {code}"),
            }
        }
        Commands::Record { code } => {
            let resolver = build_resolver()?;
            match resolver.lookup(&code).await {
                Some(info) => {
                    let fields = RecordFields::from_product(&info);
                    println!("{}", serde_json::to_string_pretty(&fields)?);
                }
                None => eprintln!("no product data found for {code}"),
            }
        }
    }

    Ok(())
}

/// Offline classification output; needs no configuration.
fn classification_report(code: &str) -> anyhow::Result<String> {
    let output = serde_json::json!({
        "classification": classify(code),
        "barcode": describe(code).to_string(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn build_resolver() -> anyhow::Result<ProductResolver> {
    let config: AppConfig =
        qrtidy_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");
    Ok(ProductResolver::new(&config)?)
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
