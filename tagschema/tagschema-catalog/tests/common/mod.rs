//! A two-type catalog used across the catalog tests.

#![allow(dead_code)]

use tagschema_catalog::{BuildError, Registry, TypedObject};
use tagschema_core::{CompoundSchema, ScalarSchema, TagCompound, TagKind, TagList, TagNode};

#[derive(Debug, Clone, PartialEq)]
pub enum Animal {
    Cow { health: i16 },
    Sheep { health: i16, color: i8 },
}

impl TypedObject for Animal {
    fn discriminator(&self) -> &str {
        match self {
            Animal::Cow { .. } => "Cow",
            Animal::Sheep { .. } => "Sheep",
        }
    }

    fn to_compound(&self) -> TagCompound {
        match self {
            Animal::Cow { health } => TagCompound::new().with("Health", *health),
            Animal::Sheep { health, color } => TagCompound::new()
                .with("Health", *health)
                .with("Color", *color),
        }
    }
}

pub fn animal_schema() -> CompoundSchema {
    CompoundSchema::new("")
        .with(ScalarSchema::new("Health", TagKind::Short))
        .unwrap()
}

pub fn registry() -> Registry<Animal> {
    let base = animal_schema();
    let cow = base
        .merge_into(
            CompoundSchema::new("")
                .with(ScalarSchema::pinned("id", "Cow"))
                .unwrap(),
        )
        .unwrap();
    let sheep = base
        .merge_into(
            CompoundSchema::new("")
                .with(ScalarSchema::pinned("id", "Sheep"))
                .unwrap()
                .with(ScalarSchema::new("Color", TagKind::Byte))
                .unwrap(),
        )
        .unwrap();

    Registry::builder()
        .register("Cow", cow, |c| {
            Ok(Animal::Cow {
                health: c.get_short("Health")?,
            })
        })
        .register("Sheep", sheep, |c| {
            let color = c.get_byte("Color")?;
            if !(0..16).contains(&color) {
                return Err(BuildError::Invalid(format!("wool color {color} out of range")));
            }
            Ok(Animal::Sheep {
                health: c.get_short("Health")?,
                color,
            })
        })
        .build()
        .unwrap()
}

pub fn record(id: &str, health: i16) -> TagNode {
    TagNode::Compound(TagCompound::new().with("id", id).with("Health", health))
}

pub fn sheep(health: i16, color: i8) -> TagNode {
    TagNode::Compound(
        TagCompound::new()
            .with("id", "Sheep")
            .with("Health", health)
            .with("Color", color),
    )
}

pub fn list(items: Vec<TagNode>) -> TagList {
    TagList::new(TagKind::Compound, items)
}
