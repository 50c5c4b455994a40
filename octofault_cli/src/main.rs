mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "octofault")]
#[command(about = "Decode, fetch, and inspect API error responses")]
struct Cli {
    /// Output format: text, json, or table
    #[arg(long, default_value = "text", global = true)]
    output: String,

    /// Fault log database (defaults to $OCTOFAULT_DB, then octofault.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an error body read from a file or stdin
    Decode(commands::decode::DecodeArgs),
    /// GET a path and show the fault if the API reports one
    Fetch(commands::fetch::FetchArgs),
    /// List recorded faults
    Faults(commands::faults::FaultsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("octofault=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "table" => OutputFormat::Table,
        _ => OutputFormat::Text,
    };

    let db_path = cli
        .db
        .or_else(|| std::env::var("OCTOFAULT_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("octofault.db"));

    match &cli.command {
        Commands::Decode(args) => commands::decode::run(args, &db_path, &format)?,
        Commands::Fetch(args) => commands::fetch::run(args, &db_path, &format).await?,
        Commands::Faults(args) => commands::faults::run(args, &db_path, &format)?,
    }

    Ok(())
}
