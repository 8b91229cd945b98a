mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use connpass_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "connpass")]
#[command(about = "Search events on connpass")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search events
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("connpass=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;
    let client = match std::env::var("CONNPASS_BASE_URL").ok() {
        Some(url) => Client::with_base_url(&url, Some(http)),
        None => Client::new(Some(http)),
    };

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
    }

    Ok(())
}
