//! Codec-agnostic core types for self-describing tagged data.
//!
//! This crate provides the generic tag tree ([`TagNode`] / [`TagCompound`] /
//! [`TagList`]), the declarative schema model ([`SchemaNode`] and its variants)
//! and the [`Verifier`] that checks one against the other.

mod error;
mod kind;
mod schema;
mod tag;
mod verify;

pub use error::{FieldError, SchemaError, TagTypeError};
pub use kind::TagKind;
pub use schema::{
    ArraySchema, CompoundSchema, ListSchema, ScalarSchema, SchemaNode, format_schema,
};
pub use tag::{TagCompound, TagList, TagNode};
pub use verify::{Verifier, Violation, ViolationKind};
