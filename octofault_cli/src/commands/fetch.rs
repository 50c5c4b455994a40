use std::path::Path;

use anyhow::Result;
use clap::Args;
use octofault_lib::{Client, RecordingClient};

use super::open_log;
use crate::output::{print_fault, print_json, OutputFormat};

#[derive(Args)]
pub struct FetchArgs {
    /// Request path (e.g. /repos/octocat/Hello-World)
    pub path: String,

    /// API base URL (defaults to $OCTOFAULT_BASE_URL, then https://api.github.com)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Store any API fault in the fault log
    #[arg(long)]
    pub record: bool,
}

pub async fn run(args: &FetchArgs, db_path: &Path, format: &OutputFormat) -> Result<()> {
    let client = match args
        .base_url
        .clone()
        .or_else(|| std::env::var("OCTOFAULT_BASE_URL").ok())
    {
        Some(url) => Client::with_base_url(&url)?,
        None => Client::new()?,
    };
    let log = if args.record {
        Some(open_log(db_path)?)
    } else {
        None
    };
    let client = RecordingClient::new(client, log);

    match client.get_json::<serde_json::Value>(&args.path).await {
        Ok(value) => {
            print_json(&value);
            Ok(())
        }
        Err(err) => {
            if let Some(exception) = err.api_exception() {
                print_fault(exception, format);
            }
            Err(err.into())
        }
    }
}
