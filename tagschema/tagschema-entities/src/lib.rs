//! Entity catalog for `tagschema`.
//!
//! Every kind is a mob: the shared [`mob_schema`] is merged into a compound
//! pinning the kind's `id`, and [`registry`] wires each kind to its builder.

mod catalog;
mod entity;
mod mob;
pub mod schema;

pub use catalog::{CatalogError, registry};
pub use entity::{EntityBase, Orientation, Vector3};
pub use mob::{Entity, Mob};
pub use schema::{entity_schema, mob_schema};
