//! # Runtime Value Model
//!
//! Defines [`Value`], the closed set of runtime shapes a check can be asked
//! about, together with the supporting object, callable and builtin types.
//!
//! ## Identity
//!
//! Values are passed through a check untouched. [`Symbol`] carries identity:
//! two symbols created with the same description are distinct, while clones
//! of one symbol compare equal.
//!
//! ## Constructors
//!
//! Class identity is by name only. An object records the [`Constructor`] it
//! was created by (its immediate constructor); there is no parent chain, so
//! an instance of a subclass does not report its parent's name anywhere.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A named class or constructor reference.
///
/// An empty name denotes an anonymous constructor. Well-known builtin
/// constructors are available as associated constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constructor {
    name: Cow<'static, str>,
}

impl Constructor {
    pub const BOOLEAN: Constructor = Constructor::builtin("Boolean");
    pub const NUMBER: Constructor = Constructor::builtin("Number");
    pub const STRING: Constructor = Constructor::builtin("String");
    pub const SYMBOL: Constructor = Constructor::builtin("Symbol");
    pub const BIGINT: Constructor = Constructor::builtin("BigInt");
    pub const OBJECT: Constructor = Constructor::builtin("Object");
    pub const ARRAY: Constructor = Constructor::builtin("Array");
    pub const FUNCTION: Constructor = Constructor::builtin("Function");
    pub const DATE: Constructor = Constructor::builtin("Date");
    pub const REGEXP: Constructor = Constructor::builtin("RegExp");
    pub const MAP: Constructor = Constructor::builtin("Map");
    pub const SET: Constructor = Constructor::builtin("Set");
    pub const WEAK_MAP: Constructor = Constructor::builtin("WeakMap");
    pub const WEAK_SET: Constructor = Constructor::builtin("WeakSet");
    pub const PROMISE: Constructor = Constructor::builtin("Promise");
    pub const ERROR: Constructor = Constructor::builtin("Error");
    pub const TYPE_ERROR: Constructor = Constructor::builtin("TypeError");
    pub const ARRAY_BUFFER: Constructor = Constructor::builtin("ArrayBuffer");
    pub const DATA_VIEW: Constructor = Constructor::builtin("DataView");

    const fn builtin(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// A user-defined constructor with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    /// A constructor without a name. It can build instances but can never
    /// be matched against.
    pub fn anonymous() -> Self {
        Self::builtin("")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A unique symbol with an optional description.
#[derive(Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    /// Creates a fresh symbol, distinct from every other symbol.
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(Some(description.into())))
    }

    /// Creates a fresh symbol without a description.
    pub fn unnamed() -> Self {
        Self(Arc::new(None))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

/// Object wrappers around primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Boxed {
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    BigInt(i128),
}

impl Boxed {
    /// Name of the wrapping constructor.
    pub fn constructor_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Symbol(_) => "Symbol",
            Self::BigInt(_) => "BigInt",
        }
    }
}

/// A structural object: ordered own properties plus class identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    constructor: Option<Constructor>,
    string_tag: Option<String>,
    properties: Vec<(String, Value)>,
}

impl Object {
    /// An object literal, constructed by `Object`.
    pub fn new() -> Self {
        Self::instance_of(&Constructor::OBJECT)
    }

    /// An object with no prototype and therefore no constructor.
    pub fn with_null_prototype() -> Self {
        Self {
            constructor: None,
            string_tag: None,
            properties: Vec::new(),
        }
    }

    /// An instance whose immediate constructor is `constructor`.
    pub fn instance_of(constructor: &Constructor) -> Self {
        Self {
            constructor: Some(constructor.clone()),
            string_tag: None,
            properties: Vec::new(),
        }
    }

    /// Attaches a custom type-identity marker. The marker replaces the
    /// default `Object` tag when the value is resolved.
    pub fn with_string_tag(mut self, tag: impl Into<String>) -> Self {
        self.string_tag = Some(tag.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a property. An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    pub fn string_tag(&self) -> Option<&str> {
        self.string_tag.as_deref()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.set(key, value);
        }
        object
    }
}

/// The flavour of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Normal,
    Arrow,
    Async,
    Generator,
    AsyncGenerator,
    Class,
}

impl FunctionKind {
    /// Name of the constructor that creates callables of this kind.
    pub fn constructor_name(&self) -> &'static str {
        match self {
            Self::Normal | Self::Arrow | Self::Class => "Function",
            Self::Async => "AsyncFunction",
            Self::Generator => "GeneratorFunction",
            Self::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// A callable value.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: String,
    kind: FunctionKind,
}

impl Function {
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn anonymous(kind: FunctionKind) -> Self {
        Self::new("", kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }
}

/// Element type of a typed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl TypedArrayKind {
    pub fn all() -> &'static [TypedArrayKind] {
        &[
            Self::Int8,
            Self::Uint8,
            Self::Uint8Clamped,
            Self::Int16,
            Self::Uint16,
            Self::Int32,
            Self::Uint32,
            Self::Float32,
            Self::Float64,
            Self::BigInt64,
            Self::BigUint64,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
            Self::BigInt64 => "BigInt64Array",
            Self::BigUint64 => "BigUint64Array",
        }
    }
}

/// Well-known builtin objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
    /// Milliseconds since the epoch.
    Date(f64),
    RegExp { source: String, flags: String },
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    WeakMap,
    WeakSet,
    Promise,
    /// A generator object (the result of calling a generator function).
    Generator,
    /// An error instance; `constructor` is its concrete class (`TypeError`, ...).
    Error { constructor: Constructor, message: String },
    ArrayBuffer(Vec<u8>),
    DataView(Vec<u8>),
    TypedArray(TypedArrayKind, Vec<u8>),
}

impl Builtin {
    /// An `Error` instance with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            constructor: Constructor::ERROR,
            message: message.into(),
        }
    }

    /// The builtin's type name. All error classes share `Error`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Date(_) => "Date",
            Self::RegExp { .. } => "RegExp",
            Self::Map(_) => "Map",
            Self::Set(_) => "Set",
            Self::WeakMap => "WeakMap",
            Self::WeakSet => "WeakSet",
            Self::Promise => "Promise",
            Self::Generator => "Generator",
            Self::Error { .. } => "Error",
            Self::ArrayBuffer(_) => "ArrayBuffer",
            Self::DataView(_) => "DataView",
            Self::TypedArray(kind, _) => kind.name(),
        }
    }

    /// Name of the immediate constructor. Generator objects have none.
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Self::Error { constructor, .. } => Some(constructor.name()),
            Self::Generator => None,
            other => Some(other.name()),
        }
    }
}

/// Any runtime value that can be checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Boxed(Boxed),
    Array(Vec<Value>),
    Object(Object),
    Function(Function),
    Builtin(Builtin),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The primitive number, if this is one. Boxed numbers are excluded.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text of a primitive or boxed string.
    pub fn as_str_like(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Boxed(Boxed::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `-0`, `NaN`, `""` and
    /// `0n` are falsy, every object is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::BigInt(n) => *n != 0,
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Name of the value's own constructor.
    ///
    /// `None` for falsy values and null-prototype objects. Only the
    /// immediate constructor is reported; no parent class is consulted.
    pub fn immediate_constructor_name(&self) -> Option<&str> {
        if !self.is_truthy() {
            return None;
        }
        match self {
            Self::Undefined | Self::Null => None,
            Self::Bool(_) => Some("Boolean"),
            Self::Number(_) => Some("Number"),
            Self::BigInt(_) => Some("BigInt"),
            Self::String(_) => Some("String"),
            Self::Symbol(_) => Some("Symbol"),
            Self::Boxed(boxed) => Some(boxed.constructor_name()),
            Self::Array(_) => Some("Array"),
            Self::Object(object) => object.constructor().map(Constructor::name),
            Self::Function(function) => Some(function.kind().constructor_name()),
            Self::Builtin(builtin) => builtin.constructor_name(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Boxed> for Value {
    fn from(boxed: Boxed) -> Self {
        Self::Boxed(boxed)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Self::Builtin(builtin)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` is `undefined`.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}
