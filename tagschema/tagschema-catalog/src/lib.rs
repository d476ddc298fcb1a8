//! Polymorphic materialization on top of `tagschema-core`.
//!
//! Key components:
//! - [`Registry`]: discriminator value → (schema, builder); tri-state [`Dispatch`]
//! - [`TypedObject`]: the inverse direction, typed object → tag compound
//! - [`CollectionView`]: lazy, dirty-tracking view over a list of records

mod collection;
mod error;
mod registry;

pub use collection::{CollectionView, Iter};
pub use error::{BuildError, ConstructError, RegistryError};
pub use registry::{
    DEFAULT_DISCRIMINATOR_FIELD, Dispatch, Registry, RegistryBuilder, TypedObject,
};
