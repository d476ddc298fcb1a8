use std::collections::HashSet;

use tagschema_core::{FieldError, TagCompound, TagKind, TagList, TagNode, TagTypeError};

#[test]
fn tag_string_creates_string_node() {
    let node = TagNode::string("hello");
    match &node {
        TagNode::String(s) => assert_eq!(s, "hello"),
        other => panic!("unexpected node variant: {:?}", other),
    }
    assert_eq!(node.as_str(), Some("hello"));
}

#[test]
fn as_str_is_none_for_non_strings() {
    assert_eq!(TagNode::Int(3).as_str(), None);
    assert_eq!(TagNode::List(TagList::empty(TagKind::String)).as_str(), None);
}

#[test]
fn try_accessor_reports_expected_and_found_kind() {
    let err = TagNode::Short(4).try_int().unwrap_err();
    assert_eq!(err, TagTypeError::new(TagKind::Int, TagKind::Short));
    assert_eq!(err.to_string(), "expected int, found short");
    assert_eq!(TagNode::Short(4).try_short(), Ok(4));
}

#[test]
fn len_counts_arrays_and_lists_only() {
    assert_eq!(TagNode::ByteArray(vec![1, 2, 3]).len(), Some(3));
    assert_eq!(TagNode::LongArray(vec![]).len(), Some(0));
    let list = TagList::new(TagKind::Int, vec![TagNode::Int(1), TagNode::Int(2)]);
    assert_eq!(TagNode::List(list).len(), Some(2));
    assert_eq!(TagNode::Int(1).len(), None);
    assert_eq!(TagNode::Compound(TagCompound::new()).len(), None);
}

#[test]
fn compound_equality_ignores_insertion_order() {
    let a = TagCompound::new().with("a", 1i32).with("b", "x");
    let b = TagCompound::new().with("b", "x").with("a", 1i32);
    assert_eq!(a, b);
}

#[test]
fn compound_field_accessors_distinguish_missing_and_wrong_kind() {
    let c = TagCompound::new().with("Health", 20i16).with("id", "Zombie");

    assert_eq!(c.get_short("Health"), Ok(20));
    assert_eq!(c.get_str("id"), Ok("Zombie"));

    let missing = c.get_short("Air").unwrap_err();
    assert!(matches!(missing, FieldError::Missing { ref field } if field == "Air"));
    assert_eq!(missing.to_string(), "field `Air` missing");

    let wrong = c.get_int("Health").unwrap_err();
    assert_eq!(wrong.field(), "Health");
    assert_eq!(wrong.to_string(), "field `Health`: expected int, found short");
}

#[test]
fn list_retain_returns_removed_count() {
    let mut list = TagList::new(
        TagKind::Int,
        (0..6).map(TagNode::Int).collect(),
    );
    let removed = list.retain(|n| matches!(n, TagNode::Int(v) if v % 2 == 0));
    assert_eq!(removed, 3);
    assert_eq!(list.len(), 3);
    assert_eq!(list.kind(), TagKind::Int);
}

#[test]
fn tag_kind_ids_round_trip() {
    for id in 1..=12u8 {
        let kind = TagKind::from_id(id).unwrap();
        assert_eq!(kind.id(), id);
    }
    assert_eq!(TagKind::from_id(0), None);
    assert_eq!(TagKind::from_id(13), None);
}

#[test]
fn tag_kind_classification() {
    assert!(TagKind::String.is_scalar());
    assert!(TagKind::Double.is_scalar());
    assert!(!TagKind::ByteArray.is_scalar());
    assert!(TagKind::IntArray.is_array());
    assert!(!TagKind::List.is_array());
    assert!(!TagKind::Compound.is_scalar());
}

#[test]
fn tag_kind_display_matches_as_str() {
    let kinds: HashSet<&str> = (1..=12u8)
        .filter_map(TagKind::from_id)
        .map(|k| {
            assert_eq!(k.to_string(), k.as_str());
            k.as_str()
        })
        .collect();
    assert_eq!(kinds.len(), 12);
}
