//! # Check Options
//!
//! Tunables for a [`Checker`](crate::Checker). Deserializable so callers
//! can keep them in a YAML or JSON config file; every field has a default.

use serde::{Deserialize, Serialize};

/// What to do when two definitions in one schema name the same subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one; the key keeps its
    /// original position in the result.
    #[default]
    Overwrite,
    /// The later definition is a schema error.
    Reject,
}

/// Options for evaluating a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    pub duplicate_keys: DuplicateKeys,
}

impl CheckOptions {
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }
}
