//! # Definitions, Rules and Schemas
//!
//! A [`Definition`] pairs one named subject value with a [`Rule`] and the
//! optionality flags. A [`Schema`] is one definition or an ordered list.
//!
//! ```
//! use vtype_check::{Definition, Rule};
//! use vtype_core::{Constructor, Value};
//!
//! let count = Definition::new("count", Value::Undefined)
//!     .is(Constructor::NUMBER)
//!     .opt(true);
//! assert_eq!(count.subject().map(|(key, _)| key), Some("count"));
//! assert!(matches!(count.rule(), Rule::Constructor(_)));
//! ```

use vtype_core::{Constructor, TypeTag, Value};

/// The type requirement attached to a definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Rule {
    /// No rule. Invalid on its own; an inert placeholder inside a union.
    #[default]
    Undefined,
    /// Matches only `null`.
    Null,
    /// Matches strings that encode a JSON object or array.
    Json,
    /// Matches by constructor name (see the matcher for the exact policy).
    Constructor(Constructor),
    /// Matches when the resolved tag equals this string exactly.
    Tag(String),
    /// Matches when any candidate matches, tried in order.
    Union(Vec<Rule>),
}

impl Rule {
    /// Builds a union rule from any mix of rule-like candidates.
    pub fn union<I>(candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        Self::Union(candidates.into_iter().map(Into::into).collect())
    }
}

impl From<Constructor> for Rule {
    fn from(constructor: Constructor) -> Self {
        Self::Constructor(constructor)
    }
}

impl From<&str> for Rule {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }
}

impl From<String> for Rule {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<TypeTag> for Rule {
    fn from(tag: TypeTag) -> Self {
        Self::Tag(tag.as_str().to_owned())
    }
}

impl From<Vec<Rule>> for Rule {
    fn from(candidates: Vec<Rule>) -> Self {
        Self::Union(candidates)
    }
}

/// One schema entry: a subject value, its rule and the optionality flags.
///
/// The subject is the first field; further fields are carried but ignored.
/// `opt` and `optional` are stored as raw values because only the literals
/// `true` and `1` switch optionality on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Definition {
    fields: Vec<(String, Value)>,
    rule: Rule,
    opt: Option<Value>,
    optional: Option<Value>,
}

impl Definition {
    /// A definition whose subject is `key`.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::empty().field(key, value)
    }

    /// A definition with no subject at all. Checking it is a schema error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a field. Only the first field is the subject.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Sets the rule (`is`).
    pub fn is(mut self, rule: impl Into<Rule>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Sets the `opt` flag.
    pub fn opt(mut self, flag: impl Into<Value>) -> Self {
        self.opt = Some(flag.into());
        self
    }

    /// Sets the `optional` flag.
    pub fn optional(mut self, flag: impl Into<Value>) -> Self {
        self.optional = Some(flag.into());
        self
    }

    /// The subject key and value, if the definition has one.
    pub fn subject(&self) -> Option<(&str, &Value)> {
        self.fields.first().map(|(key, value)| (key.as_str(), value))
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The raw `opt` and `optional` flags, in that order.
    pub fn flags(&self) -> [Option<&Value>; 2] {
        [self.opt.as_ref(), self.optional.as_ref()]
    }
}

/// One definition or an ordered list of definitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Single(Definition),
    List(Vec<Definition>),
}

impl Schema {
    /// Definitions in evaluation order, paired with their index.
    pub fn into_indexed(self) -> impl Iterator<Item = (usize, Definition)> {
        let definitions = match self {
            Self::Single(definition) => vec![definition],
            Self::List(definitions) => definitions,
        };
        definitions.into_iter().enumerate()
    }
}

impl From<Definition> for Schema {
    fn from(definition: Definition) -> Self {
        Self::Single(definition)
    }
}

impl From<Vec<Definition>> for Schema {
    fn from(definitions: Vec<Definition>) -> Self {
        Self::List(definitions)
    }
}

impl<const N: usize> From<[Definition; N]> for Schema {
    fn from(definitions: [Definition; N]) -> Self {
        Self::List(definitions.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_is_first_field() {
        let definition = Definition::new("a", 1).field("b", 2);
        assert_eq!(definition.subject(), Some(("a", &Value::Number(1.0))));
        assert_eq!(Definition::empty().subject(), None);
    }

    #[test]
    fn rule_defaults_to_undefined() {
        assert_eq!(Definition::new("a", 1).rule(), &Rule::Undefined);
    }

    #[test]
    fn rule_conversions() {
        assert_eq!(Rule::from("string"), Rule::Tag("string".into()));
        assert_eq!(Rule::from(TypeTag::BoxedString), Rule::Tag("String".into()));
        assert_eq!(
            Rule::from(Constructor::NUMBER),
            Rule::Constructor(Constructor::NUMBER)
        );
        assert_eq!(
            Rule::union([Rule::from(Constructor::NUMBER), Rule::Null]),
            Rule::Union(vec![Rule::Constructor(Constructor::NUMBER), Rule::Null])
        );
    }

    #[test]
    fn flags_are_kept_raw() {
        let definition = Definition::new("a", 1).opt(1).optional("yes");
        assert_eq!(
            definition.flags(),
            [Some(&Value::Number(1.0)), Some(&Value::from("yes"))]
        );
    }

    #[test]
    fn single_schema_is_index_zero() {
        let indexed: Vec<_> = Schema::from(Definition::new("a", 1))
            .into_indexed()
            .map(|(i, d)| (i, d.subject().map(|(k, _)| k.to_owned())))
            .collect();
        assert_eq!(indexed, [(0, Some("a".to_owned()))]);
    }
}
