//! # Error Types — Structured Error Hierarchy
//!
//! Defines the errors raised by a check. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - [`SchemaError`]: the schema itself is malformed (missing subject,
//!   anonymous constructor, short union, `undefined` used as a rule). These
//!   are programmer mistakes, independent of the value being checked.
//! - [`TypeMismatch`]: a value does not satisfy its rule. Carries the
//!   subject key and, where available, the resolved and expected type names.
//!
//! Both are fatal to the current check and surface through [`CheckError`].

use thiserror::Error;

/// Top-level error returned by a check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    /// The schema is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A value does not satisfy its rule.
    #[error(transparent)]
    Type(#[from] TypeMismatch),
}

impl CheckError {
    /// Whether this is a schema-shape defect rather than a type mismatch.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Index of the offending definition, for schema-shape defects.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Schema(err) => Some(err.index()),
            Self::Type(_) => None,
        }
    }

    /// Subject key of the offending definition, where one is known.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Schema(SchemaError::DuplicateKey { key, .. }) => Some(key),
            Self::Schema(_) => None,
            Self::Type(err) => Some(err.key()),
        }
    }
}

/// A defect in the schema itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The definition has no subject key.
    #[error("Definition #{index}: variable should be present")]
    MissingSubject {
        /// Position of the definition in the schema.
        index: usize,
    },

    /// A union rule lists fewer than two candidates.
    #[error("Definition #{index}: array of types should contain two or more items")]
    UnionTooShort {
        /// Position of the definition in the schema.
        index: usize,
        /// Number of candidates supplied.
        len: usize,
    },

    /// `undefined` was used as a rule.
    #[error("Definition #{index}: type \"undefined\" is not a valid type, use \"optional\" key instead")]
    UndefinedRule {
        /// Position of the definition in the schema.
        index: usize,
    },

    /// A union rule contains another union.
    #[error("Definition #{index}: array of types should not contain nested arrays")]
    NestedUnion {
        /// Position of the definition in the schema.
        index: usize,
    },

    /// A constructor rule has an empty name.
    #[error("Definition #{index}: constructor should have a name")]
    AnonymousConstructor {
        /// Position of the definition in the schema.
        index: usize,
    },

    /// A subject key was already produced by an earlier definition.
    #[error("Definition #{index}: variable \"{key}\" is already defined")]
    DuplicateKey {
        /// Position of the later definition in the schema.
        index: usize,
        /// The repeated subject key.
        key: String,
    },
}

impl SchemaError {
    /// Position of the offending definition.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingSubject { index }
            | Self::UnionTooShort { index, .. }
            | Self::UndefinedRule { index }
            | Self::NestedUnion { index }
            | Self::AnonymousConstructor { index }
            | Self::DuplicateKey { index, .. } => *index,
        }
    }
}

/// A value that does not satisfy its rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMismatch {
    /// A non-optional subject is `undefined`.
    #[error("Variable \"{key}\" is not optional but equals undefined")]
    Undefined {
        /// Subject key.
        key: String,
    },

    /// A numeric subject checked by constructor is NaN.
    #[error("Numerical variable \"{key}\" is NaN")]
    NotANumber {
        /// Subject key.
        key: String,
    },

    /// A numeric subject checked by constructor is not finite.
    #[error("Numerical variable \"{key}\" is Infinity")]
    NotFinite {
        /// Subject key.
        key: String,
    },

    /// The subject does not match a constructor rule.
    #[error("Variable \"{key}\" is not of type {expected}")]
    NotConstructor {
        /// Subject key.
        key: String,
        /// Requested constructor name.
        expected: String,
        /// Resolved tag of the subject.
        actual: String,
    },

    /// The subject does not match a string-tag rule.
    #[error("Variable \"{key}\" is not of type \"{expected}\"")]
    NotTag {
        /// Subject key.
        key: String,
        /// Requested tag.
        expected: String,
        /// Resolved tag of the subject.
        actual: String,
    },

    /// The subject does not match the null rule.
    #[error("Variable \"{key}\" is not null")]
    NotNull {
        /// Subject key.
        key: String,
        /// Resolved tag of the subject.
        actual: String,
    },

    /// The subject does not match the JSON rule.
    #[error("Variable \"{key}\" is not of type JSON")]
    NotJson {
        /// Subject key.
        key: String,
        /// Resolved tag of the subject.
        actual: String,
    },

    /// No candidate of a union rule matched.
    #[error("Type {actual} of variable \"{key}\" is not allowed")]
    UnionExhausted {
        /// Subject key.
        key: String,
        /// Resolved tag of the subject.
        actual: String,
    },
}

impl TypeMismatch {
    /// Subject key of the mismatching definition.
    pub fn key(&self) -> &str {
        match self {
            Self::Undefined { key }
            | Self::NotANumber { key }
            | Self::NotFinite { key }
            | Self::NotConstructor { key, .. }
            | Self::NotTag { key, .. }
            | Self::NotNull { key, .. }
            | Self::NotJson { key, .. }
            | Self::UnionExhausted { key, .. } => key,
        }
    }

    /// Resolved tag of the subject, where the mismatch records one.
    pub fn actual(&self) -> Option<&str> {
        match self {
            Self::Undefined { .. } => Some("undefined"),
            Self::NotANumber { .. } | Self::NotFinite { .. } => Some("number"),
            Self::NotConstructor { actual, .. }
            | Self::NotTag { actual, .. }
            | Self::NotNull { actual, .. }
            | Self::NotJson { actual, .. }
            | Self::UnionExhausted { actual, .. } => Some(actual),
        }
    }
}

/// Result alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_messages_name_the_definition() {
        let err = CheckError::from(SchemaError::MissingSubject { index: 3 });
        assert_eq!(err.to_string(), "Definition #3: variable should be present");
        assert!(err.is_schema());
        assert_eq!(err.index(), Some(3));
        assert_eq!(err.key(), None);
    }

    #[test]
    fn type_messages_name_the_key() {
        let err = CheckError::from(TypeMismatch::NotConstructor {
            key: "count".into(),
            expected: "Number".into(),
            actual: "string".into(),
        });
        assert_eq!(err.to_string(), "Variable \"count\" is not of type Number");
        assert!(!err.is_schema());
        assert_eq!(err.key(), Some("count"));
        assert_eq!(err.index(), None);
    }

    #[test]
    fn tag_mismatch_quotes_the_tag() {
        let err = TypeMismatch::NotTag {
            key: "s".into(),
            expected: "String".into(),
            actual: "string".into(),
        };
        assert_eq!(err.to_string(), "Variable \"s\" is not of type \"String\"");
        assert_eq!(err.actual(), Some("string"));
    }

    #[test]
    fn union_exhausted_cites_resolved_tag() {
        let err = TypeMismatch::UnionExhausted {
            key: "v".into(),
            actual: "symbol".into(),
        };
        assert_eq!(err.to_string(), "Type symbol of variable \"v\" is not allowed");
    }

    #[test]
    fn duplicate_key_reports_both_index_and_key() {
        let err = CheckError::from(SchemaError::DuplicateKey {
            index: 2,
            key: "id".into(),
        });
        assert_eq!(err.index(), Some(2));
        assert_eq!(err.key(), Some("id"));
    }
}
