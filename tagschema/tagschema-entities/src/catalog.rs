use tagschema_catalog::{Registry, RegistryError};
use tagschema_core::SchemaError;

use crate::{
    mob::{Entity, Mob},
    schema::{ID, kind_schema, mob_schema},
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Registry of every entity kind, keyed by `id`.
///
/// All kinds share the children of a single mob schema.
pub fn registry() -> Result<Registry<Entity>, CatalogError> {
    let base = mob_schema()?;
    let mut builder = Registry::builder().discriminator_field(ID);
    for (discriminator, make) in Entity::MOBS {
        let schema = kind_schema(&base, ID, discriminator)?;
        builder = builder.register(discriminator, schema, move |c| {
            Mob::from_compound(c).map(make)
        });
    }
    Ok(builder.build()?)
}
