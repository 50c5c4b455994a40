use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use octofault_lib::{ApiException, ApiResponse};

use super::open_log;
use crate::output::{print_fault, OutputFormat};

#[derive(Args)]
pub struct DecodeArgs {
    /// HTTP status code the body was returned with
    #[arg(long, default_value = "400")]
    pub status: u16,

    /// Read the body from a file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Store the decoded fault in the fault log
    #[arg(long)]
    pub record: bool,
}

pub fn run(args: &DecodeArgs, db_path: &Path, format: &OutputFormat) -> Result<()> {
    let (bytes, source) = match &args.file {
        Some(path) => (
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            (buf, "stdin".to_string())
        }
    };

    let response = ApiResponse::new(args.status, Some(body_text(&bytes)));
    let exception = ApiException::from_response(response);
    print_fault(&exception, format);

    if args.record {
        let log = open_log(db_path)?;
        let id = log.record(&exception, &source)?;
        eprintln!("Recorded fault {} in {}", id, db_path.display());
    }

    Ok(())
}

/// Invalid UTF-8 is replaced, not rejected. Empty input stays an empty body.
fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
