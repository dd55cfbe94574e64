//! # Tag Subcommand
//!
//! Prints the canonical type tag of a JSON literal.

use anyhow::{Context, Result};
use clap::Args;

use vtype_core::{resolve, Value};

/// Arguments for the `vtype tag` subcommand.
#[derive(Args, Debug)]
pub struct TagArgs {
    /// A JSON literal, e.g. `42`, `"text"` or `{"a": 1}`.
    #[arg(value_name = "JSON")]
    pub literal: String,
}

/// Execute the tag subcommand.
pub fn run_tag(args: &TagArgs) -> Result<u8> {
    println!("{}", tag_of(&args.literal)?);
    Ok(0)
}

/// The tag of a JSON literal.
pub fn tag_of(literal: &str) -> Result<String> {
    let json: serde_json::Value =
        serde_json::from_str(literal).context("argument is not a JSON literal")?;
    Ok(resolve(&Value::from(json)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_of_json_literals() {
        assert_eq!(tag_of("42").unwrap(), "number");
        assert_eq!(tag_of("\"x\"").unwrap(), "string");
        assert_eq!(tag_of("true").unwrap(), "boolean");
        assert_eq!(tag_of("null").unwrap(), "null");
        assert_eq!(tag_of("[1]").unwrap(), "Array");
        assert_eq!(tag_of("{\"a\": 1}").unwrap(), "Object");
    }

    #[test]
    fn rejects_non_json() {
        assert!(tag_of("not json").is_err());
    }
}
