//! Schemas shared by every entity kind.
//!
//! The base schemas do not name the discriminator: each kind pins its own
//! `id` when the base is merged into it.

use tagschema_core::{CompoundSchema, ListSchema, ScalarSchema, SchemaError, TagKind};

pub const ID: &str = "id";
pub const POS: &str = "Pos";
pub const MOTION: &str = "Motion";
pub const ROTATION: &str = "Rotation";
pub const FALL_DISTANCE: &str = "FallDistance";
pub const FIRE: &str = "Fire";
pub const AIR: &str = "Air";
pub const ON_GROUND: &str = "OnGround";

pub const ATTACK_TIME: &str = "AttackTime";
pub const DEATH_TIME: &str = "DeathTime";
pub const HEALTH: &str = "Health";
pub const HURT_TIME: &str = "HurtTime";

/// Fields every entity carries.
pub fn entity_schema() -> Result<CompoundSchema, SchemaError> {
    CompoundSchema::new("")
        .with(ListSchema::new(POS, TagKind::Double).with_length(3))?
        .with(ListSchema::new(MOTION, TagKind::Double).with_length(3))?
        .with(ListSchema::new(ROTATION, TagKind::Float).with_length(2))?
        .with(ScalarSchema::new(FALL_DISTANCE, TagKind::Float))?
        .with(ScalarSchema::new(FIRE, TagKind::Short))?
        .with(ScalarSchema::new(AIR, TagKind::Short))?
        .with(ScalarSchema::new(ON_GROUND, TagKind::Byte))
}

/// [`entity_schema`] plus the fields of living mobs.
pub fn mob_schema() -> Result<CompoundSchema, SchemaError> {
    entity_schema()?.merge_into(
        CompoundSchema::new("")
            .with(ScalarSchema::new(ATTACK_TIME, TagKind::Short))?
            .with(ScalarSchema::new(DEATH_TIME, TagKind::Short))?
            .with(ScalarSchema::new(HEALTH, TagKind::Short))?
            .with(ScalarSchema::new(HURT_TIME, TagKind::Short))?,
    )
}

/// Schema for one kind: `base` plus `id` pinned to `discriminator`.
pub fn kind_schema(
    base: &CompoundSchema,
    field: &str,
    discriminator: &str,
) -> Result<CompoundSchema, SchemaError> {
    base.merge_into(CompoundSchema::new("").with(ScalarSchema::pinned(field, discriminator))?)
}
