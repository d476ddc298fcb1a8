pub use tagschema_catalog as catalog;
pub use tagschema_core as core;
#[cfg(feature = "entities")]
pub use tagschema_entities as entities;

pub use tagschema_catalog::{CollectionView, Dispatch, Registry, TypedObject};
pub use tagschema_core::{CompoundSchema, TagCompound, TagKind, TagList, TagNode, Verifier};
