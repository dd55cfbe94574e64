//! # Check Subcommand
//!
//! Evaluates a definition document and prints the checked mapping as
//! pretty JSON. A failing check prints the error and exits with `1`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vtype_check::{CheckOptions, Checker, DuplicateKeys};

use crate::document::{decode_schema, load_document};

/// Arguments for the `vtype check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Definition document (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Treat a repeated subject key as a schema error.
    #[arg(long)]
    pub reject_duplicates: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 on success, 1 on check failure, 2 on operational error.
pub fn run_check(args: &CheckArgs, options: CheckOptions) -> Result<u8> {
    let document = load_document(&args.path)?;
    let schema = decode_schema(&document)
        .with_context(|| format!("failed to decode definitions in {}", args.path.display()))?;

    let options = if args.reject_duplicates {
        options.with_duplicate_keys(DuplicateKeys::Reject)
    } else {
        options
    };

    match Checker::new(options).check(schema) {
        Ok(checked) => {
            tracing::info!(count = checked.len(), "all definitions passed");
            let rendered = serde_json::to_string_pretty(&checked.to_json())
                .context("failed to render checked values")?;
            println!("{rendered}");
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            Ok(1)
        }
    }
}
