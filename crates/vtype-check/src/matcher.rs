//! # Rule Matching
//!
//! Decides whether a [`Variable`] satisfies a [`Rule`].
//!
//! ## Failure policy
//!
//! Outside a union every failing sub-check raises a [`TypeMismatch`]
//! immediately. Inside a union (`variable.multiple`) a failing sub-check
//! returns `false` so the next candidate can be tried; the union itself
//! raises [`TypeMismatch::UnionExhausted`] once every candidate has failed.
//! Schema defects and the NaN/Infinity rejection raise in both modes.
//!
//! ## Constructor matching
//!
//! A constructor rule matches when the resolved tag equals its name, when a
//! primitive tag is bridged to its boxing constructor (`number` and
//! `Number`), or when the value's immediate constructor has the same name.
//! Class identity is by name and is never inherited: an instance of a
//! subclass does not satisfy its parent's constructor.

use vtype_core::{
    is_json_structure, CheckResult, Constructor, SchemaError, TypeMismatch, TypeTag,
};

use crate::definition::Rule;
use crate::extract::Variable;

/// Checks `variable` against `rule`.
///
/// Returns `Ok(true)` on a match and `Ok(false)` for a failed candidate in
/// union mode; every other failure is an error.
pub fn matches(variable: &mut Variable<'_>, rule: &Rule) -> CheckResult<bool> {
    match rule {
        Rule::Union(candidates) => match_union(variable, candidates),
        single => match_single(variable, single),
    }
}

/// First match wins. `undefined` candidates are skipped.
fn match_union(variable: &mut Variable<'_>, candidates: &[Rule]) -> CheckResult<bool> {
    if candidates.len() < 2 {
        return Err(SchemaError::UnionTooShort {
            index: variable.index,
            len: candidates.len(),
        }
        .into());
    }
    variable.multiple = true;

    for candidate in candidates {
        if *candidate == Rule::Undefined {
            continue;
        }
        if match_single(variable, candidate)? {
            return Ok(true);
        }
    }

    Err(TypeMismatch::UnionExhausted {
        key: variable.key.to_owned(),
        actual: variable.tag_name().to_owned(),
    }
    .into())
}

fn match_single(variable: &Variable<'_>, rule: &Rule) -> CheckResult<bool> {
    match rule {
        Rule::Undefined => Err(SchemaError::UndefinedRule {
            index: variable.index,
        }
        .into()),
        Rule::Union(_) => Err(SchemaError::NestedUnion {
            index: variable.index,
        }
        .into()),
        Rule::Null => check_null(variable),
        Rule::Json => check_json(variable),
        Rule::Constructor(constructor) => check_constructor(variable, constructor),
        Rule::Tag(tag) => check_tag(variable, tag),
    }
}

/// A failed sub-check: `false` in union mode, otherwise the mismatch.
fn reject(variable: &Variable<'_>, mismatch: impl FnOnce() -> TypeMismatch) -> CheckResult<bool> {
    if variable.multiple {
        Ok(false)
    } else {
        Err(mismatch().into())
    }
}

/// Matches by constructor name. Numeric subjects must be finite whatever
/// the constructor asked for.
pub fn check_constructor(variable: &Variable<'_>, constructor: &Constructor) -> CheckResult<bool> {
    if constructor.is_anonymous() {
        return Err(SchemaError::AnonymousConstructor {
            index: variable.index,
        }
        .into());
    }
    let name = constructor.name();

    if variable.tag == Some(TypeTag::Number) {
        match variable.value.as_number() {
            Some(n) if n.is_nan() => {
                return Err(TypeMismatch::NotANumber {
                    key: variable.key.to_owned(),
                }
                .into());
            }
            Some(n) if n.is_finite() => {}
            // Includes objects whose marker claims `number`.
            _ => {
                return Err(TypeMismatch::NotFinite {
                    key: variable.key.to_owned(),
                }
                .into());
            }
        }
    }

    let bridged = variable
        .tag
        .as_ref()
        .and_then(TypeTag::boxing_constructor)
        .is_some_and(|boxing| boxing == name);

    if variable.tag_name() == name
        || bridged
        || variable.value.immediate_constructor_name() == Some(name)
    {
        return Ok(true);
    }

    reject(variable, || TypeMismatch::NotConstructor {
        key: variable.key.to_owned(),
        expected: name.to_owned(),
        actual: variable.tag_name().to_owned(),
    })
}

/// Exact, case-sensitive comparison against the resolved tag.
///
/// `"null"` is the null rule spelled as a string and matches only `null`
/// itself. `"undefined"` never matches, since `undefined` subjects are
/// settled by the extractor. Marker objects claiming either name are
/// rejected.
pub fn check_tag(variable: &Variable<'_>, expected: &str) -> CheckResult<bool> {
    if expected == TypeTag::Null.as_str() {
        return check_null(variable);
    }
    if expected != TypeTag::Undefined.as_str() && variable.tag_name() == expected {
        return Ok(true);
    }
    reject(variable, || TypeMismatch::NotTag {
        key: variable.key.to_owned(),
        expected: expected.to_owned(),
        actual: variable.tag_name().to_owned(),
    })
}

pub fn check_null(variable: &Variable<'_>) -> CheckResult<bool> {
    if variable.value.is_null() {
        return Ok(true);
    }
    reject(variable, || TypeMismatch::NotNull {
        key: variable.key.to_owned(),
        actual: variable.tag_name().to_owned(),
    })
}

pub fn check_json(variable: &Variable<'_>) -> CheckResult<bool> {
    if is_json_structure(variable.value) {
        return Ok(true);
    }
    reject(variable, || TypeMismatch::NotJson {
        key: variable.key.to_owned(),
        actual: variable.tag_name().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtype_core::{resolve, Boxed, CheckError, Object, Symbol, Value};

    fn variable(value: &Value) -> Variable<'_> {
        Variable {
            key: "v",
            value,
            index: 0,
            optional: false,
            tag: Some(resolve(value)),
            multiple: false,
        }
    }

    fn check(value: Value, rule: impl Into<Rule>) -> CheckResult<bool> {
        matches(&mut variable(&value), &rule.into())
    }

    #[test]
    fn primitive_bridges_to_boxing_constructor() {
        assert_eq!(check(Value::Bool(false), Constructor::BOOLEAN), Ok(true));
        assert_eq!(check(Value::Number(0.0), Constructor::NUMBER), Ok(true));
        assert_eq!(check(Value::from(""), Constructor::STRING), Ok(true));
        assert_eq!(check(Value::Symbol(Symbol::unnamed()), Constructor::SYMBOL), Ok(true));
    }

    #[test]
    fn boxed_values_match_by_tag() {
        assert_eq!(check(Value::Boxed(Boxed::Number(1.0)), Constructor::NUMBER), Ok(true));
        assert_eq!(check(Value::Boxed(Boxed::Bool(false)), "Boolean"), Ok(true));
    }

    #[test]
    fn nan_and_infinity_are_rejected_by_constructor() {
        let err = check(Value::Number(f64::NAN), Constructor::NUMBER).unwrap_err();
        assert_eq!(err, CheckError::Type(TypeMismatch::NotANumber { key: "v".into() }));

        let err = check(Value::Number(f64::NEG_INFINITY), Constructor::STRING).unwrap_err();
        assert_eq!(err, CheckError::Type(TypeMismatch::NotFinite { key: "v".into() }));
    }

    #[test]
    fn nan_rejection_raises_inside_union() {
        let rule = Rule::union([Rule::from(Constructor::NUMBER), Rule::from("string")]);
        let err = check(Value::Number(f64::NAN), rule).unwrap_err();
        assert!(matches!(err, CheckError::Type(TypeMismatch::NotANumber { .. })));
    }

    #[test]
    fn nan_passes_string_tag() {
        assert_eq!(check(Value::Number(f64::NAN), "number"), Ok(true));
        assert_eq!(check(Value::Number(f64::INFINITY), "number"), Ok(true));
    }

    #[test]
    fn tag_comparison_is_case_sensitive() {
        assert_eq!(check(Value::from("s"), "string"), Ok(true));
        let err = check(Value::from("s"), "String").unwrap_err();
        assert_eq!(
            err,
            CheckError::Type(TypeMismatch::NotTag {
                key: "v".into(),
                expected: "String".into(),
                actual: "string".into(),
            })
        );
    }

    #[test]
    fn subclass_does_not_satisfy_parent() {
        let child = Value::Object(Object::instance_of(&Constructor::named("Noopy")));
        assert_eq!(check(child.clone(), Constructor::named("Noopy")), Ok(true));
        assert!(check(child.clone(), Constructor::named("Noop")).is_err());
        // Every plain instance still resolves to `Object`.
        assert_eq!(check(child, Constructor::OBJECT), Ok(true));
    }

    #[test]
    fn anonymous_constructor_is_schema_error() {
        let err = check(Value::Number(1.0), Constructor::anonymous()).unwrap_err();
        assert_eq!(err, CheckError::Schema(SchemaError::AnonymousConstructor { index: 0 }));
    }

    #[test]
    fn undefined_rule_is_schema_error() {
        let err = check(Value::from("str"), Rule::Undefined).unwrap_err();
        assert_eq!(err, CheckError::Schema(SchemaError::UndefinedRule { index: 0 }));
    }

    #[test]
    fn short_union_is_schema_error() {
        let err = check(Value::Bool(true), vec![Rule::from(Constructor::BOOLEAN)]).unwrap_err();
        assert_eq!(
            err,
            CheckError::Schema(SchemaError::UnionTooShort { index: 0, len: 1 })
        );
    }

    #[test]
    fn nested_union_is_schema_error() {
        let nested = Rule::union([Rule::from("string"), Rule::from("number")]);
        let err = check(Value::Bool(true), vec![Rule::from("boolean"), nested]).unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn union_first_match_wins_and_sets_multiple() {
        let value = Value::Symbol(Symbol::new("x"));
        let mut var = variable(&value);
        let rule = Rule::union([Constructor::NUMBER, Constructor::SYMBOL]);
        assert_eq!(matches(&mut var, &rule), Ok(true));
        assert!(var.multiple);
    }

    #[test]
    fn union_skips_undefined_placeholders() {
        let rule = Rule::Union(vec![Rule::Undefined, Rule::from(Constructor::STRING)]);
        assert_eq!(check(Value::from("str"), rule), Ok(true));

        let rule = Rule::Union(vec![Rule::from(Constructor::BOOLEAN), Rule::Undefined]);
        assert_eq!(check(Value::Bool(true), rule), Ok(true));
    }

    #[test]
    fn union_exhaustion_cites_resolved_tag() {
        let rule = Rule::union(["string", "boolean"]);
        let err = check(Value::Number(7.0), rule).unwrap_err();
        assert_eq!(
            err,
            CheckError::Type(TypeMismatch::UnionExhausted {
                key: "v".into(),
                actual: "number".into(),
            })
        );
    }

    #[test]
    fn null_spellings_match_only_null() {
        for rule in [Rule::Null, Rule::from("null")] {
            assert_eq!(check(Value::Null, rule.clone()), Ok(true));
            assert!(check(Value::from("null"), rule).is_err());
        }
        let union = Rule::Union(vec![Rule::from(Constructor::BOOLEAN), Rule::Null]);
        assert_eq!(check(Value::Null, union.clone()), Ok(true));
        assert_eq!(check(Value::Bool(false), union), Ok(true));
    }

    #[test]
    fn null_and_undefined_markers_do_not_pass_for_the_real_thing() {
        let fake_null = Value::Object(Object::new().with_string_tag("null"));
        let err = check(fake_null.clone(), "null").unwrap_err();
        assert!(matches!(err, CheckError::Type(TypeMismatch::NotNull { .. })));
        assert!(check(fake_null, Rule::Null).is_err());

        let fake_undefined = Value::Object(Object::new().with_string_tag("undefined"));
        let err = check(fake_undefined, "undefined").unwrap_err();
        assert!(matches!(err, CheckError::Type(TypeMismatch::NotTag { .. })));
    }

    #[test]
    fn undefined_tag_never_matches_a_defined_value() {
        let rule = Rule::union(["undefined", "boolean"]);
        assert_eq!(check(Value::Bool(true), rule), Ok(true));
        let rule = Rule::union(["undefined", "string"]);
        assert!(check(Value::Bool(true), rule).is_err());
    }

    #[test]
    fn json_rule_accepts_structures_only() {
        assert_eq!(check(Value::from("[1,2,3]"), Rule::Json), Ok(true));
        assert_eq!(check(Value::Boxed(Boxed::String("{\"a\":1}".into())), Rule::Json), Ok(true));
        let err = check(Value::from("42"), Rule::Json).unwrap_err();
        assert!(matches!(err, CheckError::Type(TypeMismatch::NotJson { .. })));
    }

    #[test]
    fn json_tag_string_is_not_the_json_rule() {
        assert!(check(Value::from("[]"), "JSON").is_err());
    }
}
