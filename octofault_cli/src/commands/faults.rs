use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use super::open_log;
use crate::output::{print_fault_record, print_faults, OutputFormat};

#[derive(Args)]
pub struct FaultsArgs {
    /// Show a single fault by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Maximum number of faults to list
    #[arg(long, default_value = "20")]
    pub limit: usize,
}

pub fn run(args: &FaultsArgs, db_path: &Path, format: &OutputFormat) -> Result<()> {
    let log = open_log(db_path)?;

    if let Some(id) = args.id {
        match log.get(id)? {
            Some(record) => print_fault_record(&record, format),
            None => bail!("No fault with id {}", id),
        }
        return Ok(());
    }

    let records = log.recent(args.limit)?;
    if records.is_empty() {
        eprintln!("No faults recorded in {}", db_path.display());
        return Ok(());
    }
    print_faults(&records, format);
    Ok(())
}
