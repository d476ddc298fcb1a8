//! Error types for the catalog layer.
//!
//! A dispatch miss is not represented here: it is the expected `NoMatch`
//! outcome of [`Dispatch`](crate::Dispatch), not a failure.

use tagschema_core::{FieldError, Violation};

/// Error returned by a registered builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Fields are present but their contents are inconsistent.
    #[error("{0}")]
    Invalid(String),
}

/// A record whose discriminator matched a registered type could not be built.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
    /// The record does not conform to the schema registered for its discriminator.
    #[error("'{discriminator}' record does not conform: {violation}")]
    Nonconforming {
        discriminator: String,
        #[source]
        violation: Violation,
    },

    /// The builder rejected a record that passed verification.
    #[error("'{discriminator}' record could not be built: {source}")]
    Build {
        discriminator: String,
        #[source]
        source: BuildError,
    },
}

impl ConstructError {
    pub fn discriminator(&self) -> &str {
        match self {
            ConstructError::Nonconforming { discriminator, .. }
            | ConstructError::Build { discriminator, .. } => discriminator,
        }
    }
}

/// Errors produced while assembling a [`Registry`](crate::Registry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("discriminator '{0}' registered more than once")]
    DuplicateDiscriminator(String),

    #[error("discriminator field name must not be empty")]
    EmptyDiscriminatorField,
}
