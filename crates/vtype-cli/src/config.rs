//! # Configuration
//!
//! Loads [`CheckOptions`] from the file named by `--config`. Both YAML and
//! JSON are accepted; without a file every option keeps its default.

use std::path::Path;

use anyhow::{Context, Result};

use vtype_check::CheckOptions;

use crate::document::load_document;

/// Loads check options, or the defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<CheckOptions> {
    let Some(path) = path else {
        return Ok(CheckOptions::default());
    };

    let document = load_document(path)?;
    let options = serde_json::from_value(document)
        .with_context(|| format!("invalid configuration in {}", path.display()))?;

    tracing::debug!(config = %path.display(), ?options, "loaded configuration");
    Ok(options)
}
