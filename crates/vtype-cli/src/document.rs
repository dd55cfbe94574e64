//! # Definition Documents
//!
//! Decodes YAML or JSON documents into a [`Schema`].
//!
//! A document is one definition object or an array of them. In each object
//! the `is`, `opt` and `optional` keys are control keys; the first remaining
//! key is the subject. `is` is encoded as:
//!
//! | Document value | Rule |
//! |----------------|------|
//! | `null` | null rule |
//! | `"string"` | string tag |
//! | `[a, b, ...]` | union of the decoded items |
//! | `{class: Name}` | constructor named `Name` (`""` is anonymous) |
//! | `{toStringTag: JSON}` | JSON rule |
//!
//! A missing `is` leaves the rule undefined, which the checker reports as a
//! schema error.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value as Json};

use vtype_check::{Definition, Rule, Schema};
use vtype_core::{Constructor, Value};

/// Reads a YAML or JSON file into a JSON value.
///
/// `.json` files are parsed as JSON; everything else as YAML.
pub fn load_document(path: &Path) -> Result<Json> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))
    }
}

/// Decodes a whole document.
pub fn decode_schema(document: &Json) -> Result<Schema> {
    match document {
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                decode_definition(item).with_context(|| format!("definition #{index}"))
            })
            .collect::<Result<Vec<_>>>()
            .map(Schema::from),
        single => decode_definition(single).map(Schema::from),
    }
}

/// Decodes one definition object.
pub fn decode_definition(item: &Json) -> Result<Definition> {
    let Some(object) = item.as_object() else {
        bail!("expected a definition object, found {}", kind_of(item));
    };

    let mut definition = Definition::empty();
    for (key, value) in subject_fields(object) {
        definition = definition.field(key.as_str(), Value::from(value.clone()));
    }
    if let Some(rule) = object.get("is") {
        definition = definition.is(decode_rule(rule)?);
    }
    if let Some(flag) = object.get("opt") {
        definition = definition.opt(Value::from(flag.clone()));
    }
    if let Some(flag) = object.get("optional") {
        definition = definition.optional(Value::from(flag.clone()));
    }
    Ok(definition)
}

fn subject_fields(object: &Map<String, Json>) -> impl Iterator<Item = (&String, &Json)> {
    object
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "is" | "opt" | "optional"))
}

/// Decodes an `is` value.
pub fn decode_rule(rule: &Json) -> Result<Rule> {
    match rule {
        Json::Null => Ok(Rule::Null),
        Json::String(tag) => Ok(Rule::from(tag.as_str())),
        Json::Array(candidates) => candidates
            .iter()
            .map(decode_rule)
            .collect::<Result<Vec<_>>>()
            .map(Rule::Union),
        Json::Object(object) => decode_rule_object(object),
        other => bail!("unsupported rule: {}", kind_of(other)),
    }
}

fn decode_rule_object(object: &Map<String, Json>) -> Result<Rule> {
    if object.len() != 1 {
        bail!("a rule object must have exactly one key, found {}", object.len());
    }
    match (object.get("class"), object.get("toStringTag")) {
        (Some(Json::String(name)), None) if name.is_empty() => {
            Ok(Rule::Constructor(Constructor::anonymous()))
        }
        (Some(Json::String(name)), None) => Ok(Rule::Constructor(Constructor::named(name.as_str()))),
        (None, Some(Json::String(tag))) if tag == "JSON" => Ok(Rule::Json),
        (Some(other), None) => bail!("class must be a string, found {}", kind_of(other)),
        _ => bail!("unsupported rule object; expected {{class: Name}} or {{toStringTag: JSON}}"),
    }
}

fn kind_of(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
