//! # Type Tags — Canonical Type Names
//!
//! Defines the [`TypeTag`] enum and [`resolve`], the pure function mapping
//! any [`Value`] onto exactly one tag. Every rule comparison in the
//! workspace goes through this module.
//!
//! ## Canonicalisation
//!
//! | Value | Tag |
//! |-------|-----|
//! | any callable (normal, arrow, async, generator, class) | `Function` |
//! | primitive or boxed symbol | `symbol` |
//! | object literal, class instance, null-prototype object | `Object` |
//! | object carrying a custom marker | the marker, verbatim |
//! | primitive boolean / number / string / bigint | lowercase name |
//! | boxed boolean / number / string / bigint | capitalised name |
//!
//! A marker that spells a known tag resolves to that known variant, so two
//! values reporting the same name always compare equal as tags.

use std::fmt;
use std::str::FromStr;

use crate::value::{Boxed, Builtin, TypedArrayKind, Value};

/// The closed set of canonical type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    BoxedBoolean,
    BoxedNumber,
    BoxedString,
    BoxedBigInt,
    Array,
    Object,
    Function,
    Date,
    RegExp,
    Map,
    Set,
    WeakMap,
    WeakSet,
    Promise,
    Generator,
    Error,
    ArrayBuffer,
    DataView,
    TypedArray(TypedArrayKind),
    /// A user-supplied type-identity marker with no builtin meaning.
    Custom(String),
}

impl TypeTag {
    /// The tag as the string rules are compared against.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::BoxedBoolean => "Boolean",
            Self::BoxedNumber => "Number",
            Self::BoxedString => "String",
            Self::BoxedBigInt => "BigInt",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Function => "Function",
            Self::Date => "Date",
            Self::RegExp => "RegExp",
            Self::Map => "Map",
            Self::Set => "Set",
            Self::WeakMap => "WeakMap",
            Self::WeakSet => "WeakSet",
            Self::Promise => "Promise",
            Self::Generator => "Generator",
            Self::Error => "Error",
            Self::ArrayBuffer => "ArrayBuffer",
            Self::DataView => "DataView",
            Self::TypedArray(kind) => kind.name(),
            Self::Custom(name) => name,
        }
    }

    /// For the bridged primitive tags, the boxing constructor whose name is
    /// accepted as a synonym (`number` ↔ `Number`).
    pub fn boxing_constructor(&self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("Boolean"),
            Self::Number => Some("Number"),
            Self::String => Some("String"),
            Self::Symbol => Some("Symbol"),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "undefined" => Self::Undefined,
            "null" => Self::Null,
            "boolean" => Self::Boolean,
            "number" => Self::Number,
            "bigint" => Self::BigInt,
            "string" => Self::String,
            "symbol" | "Symbol" => Self::Symbol,
            "Boolean" => Self::BoxedBoolean,
            "Number" => Self::BoxedNumber,
            "String" => Self::BoxedString,
            "BigInt" => Self::BoxedBigInt,
            "Array" => Self::Array,
            "Object" | "object" => Self::Object,
            "Function" | "function" | "AsyncFunction" | "GeneratorFunction" | "AsyncGeneratorFunction" => {
                Self::Function
            }
            "Date" => Self::Date,
            "RegExp" => Self::RegExp,
            "Map" => Self::Map,
            "Set" => Self::Set,
            "WeakMap" => Self::WeakMap,
            "WeakSet" => Self::WeakSet,
            "Promise" => Self::Promise,
            "Generator" => Self::Generator,
            "Error" => Self::Error,
            "ArrayBuffer" => Self::ArrayBuffer,
            "DataView" => Self::DataView,
            other => TypedArrayKind::all()
                .iter()
                .find(|kind| kind.name() == other)
                .map_or_else(|| Self::Custom(other.to_owned()), |kind| Self::TypedArray(*kind)),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = std::convert::Infallible;

    /// Parses a tag name. Unknown names become [`TypeTag::Custom`]; the
    /// callable and symbol variants collapse exactly as [`resolve`] does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Resolves the canonical tag of a value. Pure and deterministic.
pub fn resolve(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::BigInt(_) => TypeTag::BigInt,
        Value::String(_) => TypeTag::String,
        Value::Symbol(_) | Value::Boxed(Boxed::Symbol(_)) => TypeTag::Symbol,
        Value::Boxed(Boxed::Bool(_)) => TypeTag::BoxedBoolean,
        Value::Boxed(Boxed::Number(_)) => TypeTag::BoxedNumber,
        Value::Boxed(Boxed::String(_)) => TypeTag::BoxedString,
        Value::Boxed(Boxed::BigInt(_)) => TypeTag::BoxedBigInt,
        Value::Array(_) => TypeTag::Array,
        Value::Object(object) => object
            .string_tag()
            .map_or(TypeTag::Object, TypeTag::from_name),
        Value::Function(_) => TypeTag::Function,
        Value::Builtin(builtin) => resolve_builtin(builtin),
    }
}

fn resolve_builtin(builtin: &Builtin) -> TypeTag {
    match builtin {
        Builtin::Date(_) => TypeTag::Date,
        Builtin::RegExp { .. } => TypeTag::RegExp,
        Builtin::Map(_) => TypeTag::Map,
        Builtin::Set(_) => TypeTag::Set,
        Builtin::WeakMap => TypeTag::WeakMap,
        Builtin::WeakSet => TypeTag::WeakSet,
        Builtin::Promise => TypeTag::Promise,
        Builtin::Generator => TypeTag::Generator,
        Builtin::Error { .. } => TypeTag::Error,
        Builtin::ArrayBuffer(_) => TypeTag::ArrayBuffer,
        Builtin::DataView(_) => TypeTag::DataView,
        Builtin::TypedArray(kind, _) => TypeTag::TypedArray(*kind),
    }
}
