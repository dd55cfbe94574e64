//! # Definition Extraction
//!
//! Pulls the subject out of a [`Definition`] and turns it into a
//! [`Variable`], the working record the matcher operates on.

use vtype_core::{resolve, CheckResult, SchemaError, TypeMismatch, TypeTag, Value};

use crate::definition::Definition;

/// A subject under check.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable<'a> {
    pub key: &'a str,
    pub value: &'a Value,
    /// Position of the definition in the schema.
    pub index: usize,
    pub optional: bool,
    /// Resolved tag; `None` when an optional subject is `undefined` and
    /// checking was skipped.
    pub tag: Option<TypeTag>,
    /// Set once a union rule is being evaluated.
    pub multiple: bool,
}

impl Variable<'_> {
    /// The resolved tag as text, `undefined` when none was resolved.
    pub fn tag_name(&self) -> &str {
        self.tag.as_ref().map_or("undefined", TypeTag::as_str)
    }
}

/// Whether an `opt`/`optional` flag switches optionality on. Only the
/// literals `true` and `1` do; other truthy values are ignored.
pub fn is_flag_set(flag: &Value) -> bool {
    match flag {
        Value::Bool(b) => *b,
        Value::Number(n) => *n == 1.0,
        _ => false,
    }
}

/// Extracts the subject of `definition` at position `index`.
///
/// An `undefined` subject is accepted without a tag when optional and
/// rejected otherwise. Every other subject comes back with its tag resolved.
pub fn extract(definition: &Definition, index: usize) -> CheckResult<Variable<'_>> {
    let (key, value) = definition
        .subject()
        .ok_or(SchemaError::MissingSubject { index })?;

    let optional = definition.flags().into_iter().flatten().any(is_flag_set);

    let tag = if value.is_undefined() {
        if !optional {
            return Err(TypeMismatch::Undefined { key: key.to_owned() }.into());
        }
        None
    } else {
        Some(resolve(value))
    };

    Ok(Variable {
        key,
        value,
        index,
        optional,
        tag,
        multiple: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtype_core::{CheckError, Constructor};

    #[test]
    fn missing_subject_is_schema_error() {
        let err = extract(&Definition::empty().is(Constructor::NUMBER), 4).unwrap_err();
        assert_eq!(err, CheckError::Schema(SchemaError::MissingSubject { index: 4 }));
    }

    #[test]
    fn resolves_tag_for_defined_values() {
        let definition = Definition::new("n", 2);
        let variable = extract(&definition, 0).unwrap();
        assert_eq!(variable.key, "n");
        assert_eq!(variable.tag, Some(TypeTag::Number));
        assert!(!variable.optional);
        assert!(!variable.multiple);
    }

    #[test]
    fn optional_undefined_skips_resolution() {
        let definition = Definition::new("n", Value::Undefined).opt(true);
        let variable = extract(&definition, 0).unwrap();
        assert!(variable.optional);
        assert_eq!(variable.tag, None);
        assert_eq!(variable.tag_name(), "undefined");
    }

    #[test]
    fn required_undefined_is_type_error() {
        let definition = Definition::new("n", Value::Undefined);
        let err = extract(&definition, 0).unwrap_err();
        assert_eq!(
            err,
            CheckError::Type(TypeMismatch::Undefined { key: "n".into() })
        );
    }

    #[test]
    fn only_true_and_one_are_honoured() {
        assert!(is_flag_set(&Value::Bool(true)));
        assert!(is_flag_set(&Value::Number(1.0)));
        for flag in [
            Value::Bool(false),
            Value::Number(2.0),
            Value::Number(0.0),
            Value::from("true"),
            Value::from("1"),
            Value::Null,
            Value::Undefined,
        ] {
            assert!(!is_flag_set(&flag), "{flag:?}");
        }
    }

    #[test]
    fn either_flag_enables_optionality() {
        let by_optional = Definition::new("a", Value::Undefined).optional(1);
        assert!(extract(&by_optional, 0).unwrap().optional);

        let ignored = Definition::new("a", Value::Undefined).opt("yes").optional(2);
        assert!(extract(&ignored, 0).is_err());
    }
}
