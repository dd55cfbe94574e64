//! # vtype-cli — Command Line Front End for vtype
//!
//! Provides the `vtype` binary, which runs type checks described in YAML or
//! JSON documents without writing any Rust.
//!
//! ## Subcommands
//!
//! - `vtype check` — Evaluate a definition document and print the result.
//! - `vtype tag` — Print the canonical type tag of a JSON literal.
//!
//! ```bash
//! vtype check definitions.yaml
//! vtype --config vtype.yaml check definitions.json --reject-duplicates
//! vtype tag '[1, 2, 3]'
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when a check fails, `2` on an operational error such
//! as an unreadable file or an undecodable document.

pub mod check;
pub mod config;
pub mod document;
pub mod tag;
