//! # vtype-core — Foundational Types for vtype
//!
//! This crate is the leaf of the vtype workspace. It defines the runtime
//! value model that checks operate on, the canonical type-tag resolver, and
//! the error hierarchy shared by every other crate.
//!
//! ## Key Design Principles
//!
//! 1. **A closed value model.** [`Value`] enumerates every shape a checked
//!    value can take: primitives, boxed primitives, structural objects,
//!    callables, and the well-known builtin objects.
//!
//! 2. **A closed tag domain.** [`resolve`] maps any value onto a
//!    [`TypeTag`] variant. Implementation variants are collapsed (all
//!    callables are `Function`, all symbol-likes are `symbol`), so every
//!    consumer matches exhaustively over one enum instead of comparing
//!    free-form strings.
//!
//! 3. **Boxed vs primitive is visible in the tag.** Primitives resolve to
//!    lowercase tags (`number`), their object wrappers to capitalised ones
//!    (`Number`).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vtype-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod json;
pub mod tag;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{CheckError, CheckResult, SchemaError, TypeMismatch};
pub use json::is_json_structure;
pub use tag::{resolve, TypeTag};
pub use value::{Boxed, Builtin, Constructor, Function, FunctionKind, Object, Symbol, TypedArrayKind, Value};
