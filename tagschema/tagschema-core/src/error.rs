//! Error types for tag access and schema construction.

use crate::kind::TagKind;

/// A tag node was accessed as a kind it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct TagTypeError {
    pub expected: TagKind,
    pub found: TagKind,
}

impl TagTypeError {
    pub fn new(expected: TagKind, found: TagKind) -> Self {
        Self { expected, found }
    }
}

/// Failure reading a required field out of a [`TagCompound`](crate::TagCompound).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field `{field}` missing")]
    Missing { field: String },

    #[error("field `{field}`: {source}")]
    WrongKind {
        field: String,
        #[source]
        source: TagTypeError,
    },
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::Missing { field } | FieldError::WrongKind { field, .. } => field,
        }
    }
}

/// Errors raised while assembling a schema tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A compound schema already holds a child with this name.
    #[error("compound schema '{compound}' already has a child named '{child}'")]
    DuplicateChild { compound: String, child: String },
}
