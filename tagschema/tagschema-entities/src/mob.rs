use tagschema_catalog::{BuildError, TypedObject};
use tagschema_core::TagCompound;

use crate::{
    entity::EntityBase,
    schema::{ATTACK_TIME, DEATH_TIME, HEALTH, HURT_TIME, ID},
};

/// A living entity.
///
/// Only mobs with non-negative `health` survive a round trip: the builder
/// rejects negative health, so such a mob can be written but never read back.
#[derive(Debug, Clone, PartialEq)]
pub struct Mob {
    pub entity: EntityBase,
    pub attack_time: i16,
    pub death_time: i16,
    /// Must be non-negative.
    pub health: i16,
    pub hurt_time: i16,
}

impl Default for Mob {
    fn default() -> Self {
        Self {
            entity: EntityBase::default(),
            attack_time: 0,
            death_time: 0,
            health: 10,
            hurt_time: 0,
        }
    }
}

impl Mob {
    pub fn from_compound(c: &TagCompound) -> Result<Self, BuildError> {
        let mob = Self {
            entity: EntityBase::from_compound(c)?,
            attack_time: c.get_short(ATTACK_TIME)?,
            death_time: c.get_short(DEATH_TIME)?,
            health: c.get_short(HEALTH)?,
            hurt_time: c.get_short(HURT_TIME)?,
        };
        if !mob.is_valid() {
            return Err(BuildError::Invalid(format!(
                "negative health {}",
                mob.health
            )));
        }
        Ok(mob)
    }

    /// Whether [`from_compound`](Self::from_compound) accepts this mob's
    /// persisted form.
    pub fn is_valid(&self) -> bool {
        self.health >= 0
    }

    pub fn write_into(&self, c: &mut TagCompound) {
        self.entity.write_into(c);
        c.insert(ATTACK_TIME, self.attack_time);
        c.insert(DEATH_TIME, self.death_time);
        c.insert(HEALTH, self.health);
        c.insert(HURT_TIME, self.hurt_time);
    }
}

/// Every entity kind this catalog models.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Zombie(Mob),
    Squid(Mob),
    Ghast(Mob),
}

impl Entity {
    /// Discriminators and constructors of every mob kind, in registration order.
    pub const MOBS: [(&'static str, fn(Mob) -> Entity); 3] = [
        ("Zombie", Entity::Zombie),
        ("Squid", Entity::Squid),
        ("Ghast", Entity::Ghast),
    ];

    pub fn mob(&self) -> &Mob {
        match self {
            Entity::Zombie(mob) | Entity::Squid(mob) | Entity::Ghast(mob) => mob,
        }
    }

    pub fn mob_mut(&mut self) -> &mut Mob {
        match self {
            Entity::Zombie(mob) | Entity::Squid(mob) | Entity::Ghast(mob) => mob,
        }
    }
}

impl TypedObject for Entity {
    fn discriminator(&self) -> &str {
        match self {
            Entity::Zombie(_) => "Zombie",
            Entity::Squid(_) => "Squid",
            Entity::Ghast(_) => "Ghast",
        }
    }

    fn to_compound(&self) -> TagCompound {
        let mut c = TagCompound::new().with(ID, self.discriminator());
        self.mob().write_into(&mut c);
        c
    }
}
