//! # Schema Evaluation
//!
//! Walks a [`Schema`] in order, extracting and matching each definition,
//! and collects the subjects into a [`Checked`] mapping. The first failing
//! definition aborts the whole evaluation; no partial result is returned.

use std::ops::Index;

use vtype_core::{CheckResult, SchemaError, Value};

use crate::definition::{Definition, Schema};
use crate::extract::{extract, Variable};
use crate::matcher;
use crate::options::{CheckOptions, DuplicateKeys};

/// Ordered mapping of subject keys to their checked values.
///
/// Values are the inputs, unmodified. Each key appears once, in the order
/// its first definition appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checked {
    entries: Vec<(String, Value)>,
}

impl Checked {
    /// Inserts or replaces. A replaced key keeps its position.
    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Renders the mapping as a JSON object (see [`Value::to_json`]).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl Index<&str> for Checked {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no checked variable named {key:?}"),
        }
    }
}

impl IntoIterator for Checked {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Evaluates schemas under a fixed set of [`CheckOptions`].
///
/// Holds no state between calls; one checker can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    options: CheckOptions,
}

impl Checker {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Checks every definition of `schema` in order.
    ///
    /// # Errors
    ///
    /// The first [`SchemaError`] or [`TypeMismatch`](vtype_core::TypeMismatch)
    /// encountered, wrapped in a [`CheckError`](vtype_core::CheckError).
    pub fn check(&self, schema: impl Into<Schema>) -> CheckResult<Checked> {
        let mut result = Checked::default();

        for (index, definition) in schema.into().into_indexed() {
            let variable = match check_definition(&definition, index) {
                Ok(variable) => variable,
                Err(err) => {
                    tracing::debug!(index, error = %err, "definition rejected");
                    return Err(err);
                }
            };

            if self.options.duplicate_keys == DuplicateKeys::Reject
                && result.contains_key(variable.key)
            {
                tracing::debug!(index, key = variable.key, "duplicate subject key rejected");
                return Err(SchemaError::DuplicateKey {
                    index,
                    key: variable.key.to_owned(),
                }
                .into());
            }

            if result
                .insert(variable.key.to_owned(), variable.value.clone())
                .is_some()
            {
                tracing::trace!(index, key = variable.key, "subject key overwritten");
            }
        }

        Ok(result)
    }
}

/// Extracts and matches one definition.
fn check_definition(definition: &Definition, index: usize) -> CheckResult<Variable<'_>> {
    let mut variable = extract(definition, index)?;

    tracing::trace!(
        index,
        key = variable.key,
        tag = variable.tag_name(),
        optional = variable.optional,
        "checking definition"
    );

    // An optional `undefined` subject has no tag and passes unchecked.
    if variable.tag.is_some() {
        let matched = matcher::matches(&mut variable, definition.rule())?;
        debug_assert!(matched, "matcher reported a silent failure outside a union");
    }

    Ok(variable)
}

/// Checks `schema` with default options.
///
/// ```
/// use vtype_check::{check_types, Definition};
/// use vtype_core::{Constructor, Object, Value};
///
/// let user = Object::new().with_property("name", "a");
/// let checked = check_types(Definition::new("user", user.clone()).is(Constructor::OBJECT))?;
/// assert_eq!(checked["user"], Value::Object(user));
/// # Ok::<(), vtype_core::CheckError>(())
/// ```
pub fn check_types(schema: impl Into<Schema>) -> CheckResult<Checked> {
    Checker::default().check(schema)
}
