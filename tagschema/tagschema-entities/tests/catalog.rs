use std::sync::Arc;

use proptest::prelude::*;
use tagschema_catalog::{CollectionView, ConstructError, Dispatch, TypedObject};
use tagschema_core::{TagKind, TagList, TagNode, ViolationKind};
use tagschema_entities::{
    Entity, EntityBase, Mob, Orientation, Vector3,
    schema::{HEALTH, POS},
};

fn zombie() -> Entity {
    Entity::Zombie(Mob::default())
}

#[test]
fn registry_lists_every_kind() {
    let registry = tagschema_entities::registry().unwrap();
    assert_eq!(registry.discriminator_field(), "id");
    assert_eq!(registry.discriminators(), ["Ghast", "Squid", "Zombie"]);
}

#[test]
fn kinds_share_base_children() {
    let registry = tagschema_entities::registry().unwrap();
    let health = |id: &str| {
        registry
            .schema(id)
            .unwrap()
            .children()
            .find(|c| c.name() == HEALTH)
            .cloned()
            .unwrap()
    };
    assert!(Arc::ptr_eq(&health("Zombie"), &health("Ghast")));
    assert_eq!(health("Squid").kind(), TagKind::Short);
}

#[test]
fn serialized_entity_carries_discriminator() {
    let registry = tagschema_entities::registry().unwrap();
    let c = registry.serialize(&zombie());
    assert_eq!(c.get_str("id").unwrap(), "Zombie");
    assert_eq!(c.get_short(HEALTH).unwrap(), 10);
    assert_eq!(c.get_short("Air").unwrap(), 300);
    assert_eq!(c.get_list(POS).unwrap().kind(), TagKind::Double);
}

#[test]
fn mismatched_field_kind_is_rejected() {
    let registry = tagschema_entities::registry().unwrap();
    let mut c = zombie().to_compound();
    c.insert(HEALTH, 10i32);

    let Dispatch::Invalid(ConstructError::Nonconforming { violation, .. }) = registry.dispatch(&c)
    else {
        panic!("expected a nonconforming record");
    };
    assert_eq!(violation.path, HEALTH);
    assert!(matches!(violation.kind, ViolationKind::KindMismatch { .. }));
}

#[test]
fn short_position_is_rejected() {
    let registry = tagschema_entities::registry().unwrap();
    let mut c = zombie().to_compound();
    c.insert(
        POS,
        TagList::new(TagKind::Double, vec![1.0f64.into(), 2.0f64.into()]),
    );
    let err = registry.construct(&c).unwrap_err();
    assert_eq!(err.discriminator(), "Zombie");
    assert!(matches!(err, ConstructError::Nonconforming { .. }));
}

#[test]
fn negative_health_fails_in_builder() {
    let registry = tagschema_entities::registry().unwrap();
    let mut c = zombie().to_compound();
    c.insert(HEALTH, -1i16);
    assert!(matches!(
        registry.construct(&c),
        Err(ConstructError::Build { .. })
    ));
}

#[test]
fn negative_health_mob_is_written_but_not_read_back() {
    let registry = tagschema_entities::registry().unwrap();
    let wounded = Entity::Ghast(Mob {
        health: -3,
        ..Mob::default()
    });
    assert!(!wounded.mob().is_valid());
    assert!(Mob::default().is_valid());

    let mut entities = TagList::empty(TagKind::Compound);
    let mut view = CollectionView::new(&mut entities, &registry);
    view.add(&wounded);
    assert_eq!(view.len(), 1);
    assert!(matches!(
        view.find_all("Ghast"),
        Err(ConstructError::Build { .. })
    ));
    assert_eq!(view.remove_all("Ghast"), 0);
}

#[test]
fn collection_over_mixed_entities() {
    let registry = tagschema_entities::registry().unwrap();
    let squid = Entity::Squid(Mob {
        health: 4,
        ..Mob::default()
    });
    let mut creeper = zombie().to_compound();
    creeper.insert("id", "Creeper");

    let mut entities = TagList::empty(TagKind::Compound);
    entities.push(registry.serialize(&zombie()));
    entities.push(creeper);
    entities.push(registry.serialize(&squid));

    let mut view = CollectionView::new(&mut entities, &registry);
    assert_eq!(view.find_all("Squid").unwrap(), [squid.clone()]);
    assert_eq!(view.iter().count(), 2);

    assert_eq!(view.remove_all_matching(|e| e.mob().health < 5), 1);
    assert!(view.is_dirty());
    assert_eq!(view.len(), 2);
    assert_eq!(view.find_all("Zombie").unwrap(), [zombie()]);
}

fn finite_f64() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn finite_f32() -> impl Strategy<Value = f32> {
    -360.0f32..360.0
}

fn vector3() -> impl Strategy<Value = Vector3> {
    (finite_f64(), finite_f64(), finite_f64()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

prop_compose! {
    fn entity_base()(
        pos in vector3(),
        motion in vector3(),
        yaw in finite_f32(),
        pitch in finite_f32(),
        fall_distance in 0.0f32..256.0,
        fire in any::<i16>(),
        air in any::<i16>(),
        on_ground in any::<bool>(),
    ) -> EntityBase {
        EntityBase {
            pos,
            motion,
            rotation: Orientation { yaw, pitch },
            fall_distance,
            fire,
            air,
            on_ground,
        }
    }
}

prop_compose! {
    fn mob()(
        entity in entity_base(),
        attack_time in any::<i16>(),
        death_time in any::<i16>(),
        health in 0i16..=i16::MAX,
        hurt_time in any::<i16>(),
    ) -> Mob {
        Mob { entity, attack_time, death_time, health, hurt_time }
    }
}

fn entity() -> impl Strategy<Value = Entity> {
    (0..Entity::MOBS.len(), mob()).prop_map(|(i, mob)| (Entity::MOBS[i].1)(mob))
}

proptest! {
    #[test]
    fn serialized_entity_reconstructs(entity in entity()) {
        let registry = tagschema_entities::registry().unwrap();
        let node = TagNode::Compound(registry.serialize(&entity));
        match registry.dispatch_node(&node) {
            Dispatch::Matched(rebuilt) => prop_assert_eq!(rebuilt, entity),
            other => prop_assert!(false, "unexpected dispatch outcome: {:?}", other),
        }
    }
}
