//! # vtype-check — Declarative Runtime Type Checks
//!
//! Validates a set of named values against declared rules and returns them
//! in an ordered mapping, or fails fast with a descriptive error. Meant as a
//! lightweight assertion layer at function and module boundaries.
//!
//! ## Pipeline
//!
//! 1. [`extract`](mod@extract) pulls the subject out of each [`Definition`] and resolves
//!    its [`TypeTag`](vtype_core::TypeTag). Optional `undefined` subjects
//!    stop here.
//! 2. [`matcher`] applies the definition's [`Rule`]: constructor, string tag,
//!    `null`, JSON, or a union of those.
//! 3. [`evaluate`] records each passing subject into a [`Checked`] mapping.
//!    The first failure aborts the call.
//!
//! ```
//! use vtype_check::{check_types, Definition, Rule};
//! use vtype_core::{Constructor, Symbol, Value};
//!
//! let tag = Symbol::new("x");
//! let checked = check_types([
//!     Definition::new("tag", tag.clone()).is(Rule::union([Constructor::NUMBER, Constructor::SYMBOL])),
//!     Definition::new("count", Value::Undefined).is(Constructor::NUMBER).opt(true),
//! ])?;
//! assert_eq!(checked["tag"], Value::Symbol(tag));
//! assert_eq!(checked["count"], Value::Undefined);
//! # Ok::<(), vtype_core::CheckError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Checks never transform values; the mapping holds the inputs verbatim.
//! - No state survives a call. Nothing is cached between evaluations.
//! - Diagnostics go through `tracing` at `trace`/`debug` level only.

pub mod definition;
pub mod evaluate;
pub mod extract;
pub mod matcher;
pub mod options;

pub use definition::{Definition, Rule, Schema};
pub use evaluate::{check_types, Checked, Checker};
pub use extract::{extract, is_flag_set, Variable};
pub use matcher::matches;
pub use options::{CheckOptions, DuplicateKeys};
