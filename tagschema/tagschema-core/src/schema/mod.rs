//! Declarative schema model describing expected tag tree shapes.

mod format;
mod types;

pub use format::format_schema;
pub use types::{ArraySchema, CompoundSchema, ListSchema, ScalarSchema, SchemaNode};
