//! # JSON Interop
//!
//! JSON detection for the JSON rule, plus conversions between
//! [`serde_json::Value`] and [`Value`].
//!
//! Only the shape of the *decoded* payload matters to the JSON rule: a
//! string counts as JSON iff it parses to an object or an array. Encoded
//! primitives (`"0"`, `"true"`, `"null"`, `"\"str\""`) do not count.

use serde::de::{Deserialize, IgnoredAny};
use serde_json::{Map, Number};

use crate::value::{Boxed, Builtin, Object, Value};

/// Whether `value` is a primitive or boxed string encoding a JSON object
/// or array. Parse failures are a plain `false`.
///
/// The text is validated without being decoded, so out-of-range numbers
/// (`[1e400]`) and arbitrarily deep nesting are accepted like any other
/// well-formed document.
pub fn is_json_structure(value: &Value) -> bool {
    let Some(text) = value.as_str_like() else {
        return false;
    };

    let opens_structure = matches!(
        text.trim_start_matches([' ', '\t', '\n', '\r']).as_bytes().first(),
        Some(b'{' | b'[')
    );
    opens_structure && is_well_formed(text)
}

fn is_well_formed(text: &str) -> bool {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    IgnoredAny::deserialize(&mut deserializer).is_ok() && deserializer.end().is_ok()
}

impl From<serde_json::Value> for Value {
    /// JSON objects become object literals with their key order preserved.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Lossy JSON rendering, for reporting checked values.
    ///
    /// `undefined`, callables, opaque builtins and non-finite numbers render
    /// as `null`; symbols render as `Symbol(description)`; boxed values
    /// render as their primitive.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serde_json::Value::Null,
            Value::Bool(b) | Value::Boxed(Boxed::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Number(n) | Value::Boxed(Boxed::Number(n)) => number_to_json(*n),
            Value::BigInt(n) | Value::Boxed(Boxed::BigInt(n)) => serde_json::Value::String(n.to_string()),
            Value::String(s) | Value::Boxed(Boxed::String(s)) => serde_json::Value::String(s.clone()),
            Value::Symbol(symbol) | Value::Boxed(Boxed::Symbol(symbol)) => {
                serde_json::Value::String(format!("{symbol:?}"))
            }
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(object) => object_to_json(object),
            Value::Builtin(builtin) => builtin_to_json(builtin),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

fn object_to_json(object: &Object) -> serde_json::Value {
    let map: Map<String, serde_json::Value> = object
        .properties()
        .map(|(key, value)| (key.to_owned(), value.to_json()))
        .collect();
    serde_json::Value::Object(map)
}

fn builtin_to_json(builtin: &Builtin) -> serde_json::Value {
    match builtin {
        Builtin::Date(ms) => number_to_json(*ms),
        Builtin::RegExp { source, flags } => serde_json::Value::String(format!("/{source}/{flags}")),
        Builtin::Map(entries) => serde_json::Value::Array(
            entries
                .iter()
                .map(|(k, v)| serde_json::Value::Array(vec![k.to_json(), v.to_json()]))
                .collect(),
        ),
        Builtin::Set(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
        Builtin::Error { message, .. } => serde_json::Value::String(message.clone()),
        _ => serde_json::Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;
    use serde_json::json;

    #[test]
    fn encoded_structures_are_json() {
        assert!(is_json_structure(&Value::from("[1,2,3]")));
        assert!(is_json_structure(&Value::from("{\"a\":1}")));
        assert!(is_json_structure(&Value::from("  [] ")));
        assert!(is_json_structure(&Value::Boxed(Boxed::String("{}".into()))));
    }

    #[test]
    fn encoded_primitives_are_not_json() {
        for text in ["\"just a string\"", "42", "true", "false", "null", "0", "-1", "", "gsd", "[1,"] {
            assert!(!is_json_structure(&Value::from(text)), "{text:?}");
        }
    }

    #[test]
    fn out_of_range_numbers_are_still_json() {
        assert!(is_json_structure(&Value::from("[1e400]")));
        assert!(is_json_structure(&Value::from("{\"big\": -1e400}")));
    }

    #[test]
    fn nesting_depth_is_unbounded() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert!(is_json_structure(&Value::from(deep.as_str())));

        let unbalanced = format!("{}{}", "[".repeat(200), "]".repeat(199));
        assert!(!is_json_structure(&Value::from(unbalanced.as_str())));
    }

    #[test]
    fn trailing_garbage_is_not_json() {
        assert!(!is_json_structure(&Value::from("[1] x")));
        assert!(!is_json_structure(&Value::from("{} {}")));
        assert!(is_json_structure(&Value::from("\n{}\t ")));
    }

    #[test]
    fn non_strings_are_not_json() {
        assert!(!is_json_structure(&Value::Null));
        assert!(!is_json_structure(&Value::Number(1.0)));
        assert!(!is_json_structure(&Value::Array(vec![])));
        assert!(!is_json_structure(&Value::Object(Object::new())));
    }

    #[test]
    fn json_objects_keep_key_order() {
        let value = Value::from(json!({"z": 1, "a": [true, null], "m": "s"}));
        let Value::Object(object) = &value else {
            panic!("expected object, got {value:?}");
        };
        let keys: Vec<_> = object.properties().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(object.constructor().map(|c| c.name()), Some("Object"));
    }

    #[test]
    fn to_json_is_lossy_but_total() {
        assert_eq!(Value::Undefined.to_json(), json!(null));
        assert_eq!(Value::Number(f64::NAN).to_json(), json!(null));
        assert_eq!(Value::Boxed(Boxed::Number(2.0)).to_json(), json!(2.0));
        assert_eq!(Value::Symbol(Symbol::new("x")).to_json(), json!("Symbol(x)"));
        let object = Object::new().with_property("a", 1).with_property("b", "c");
        assert_eq!(Value::Object(object).to_json(), json!({"a": 1.0, "b": "c"}));
    }
}
