use crate::ir::SelectionMap;
use crate::ir::TypedChildren;
use crate::ir::tests::test_utils::Fixture;
use proptest::prelude::*;

#[test]
fn insert_keeps_first_selection_order() {
    let fixture = Fixture::new();
    let mut selection_map = SelectionMap::new();
    for key in ["b", "a", "b", "c", "a"] {
        selection_map.insert_or_merge(fixture.scalar_field(key, vec![]));
    }

    assert_eq!(selection_map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(selection_map.get("b").unwrap().occurrences().len(), 2);
    assert_eq!(selection_map.get("c").unwrap().occurrences().len(), 1);
    assert!(selection_map.contains_key("a"));
    assert!(!selection_map.contains_key("f"));
}

#[test]
fn merging_a_shared_key_merges_children_per_type() {
    let fixture = Fixture::new();
    let mut left = SelectionMap::new();
    left.insert_or_merge(fixture.pet_field(&["Dog"]));
    let mut right = SelectionMap::new();
    right.insert_or_merge(fixture.pet_field(&["Cat", "Dog"]));

    left.merge(right);

    let pet = left.get("pet").unwrap();
    assert_eq!(pet.occurrences().len(), 2);
    assert_eq!(pet.parent_type_name(), "Query");
    assert_eq!(pet.field_name(), "pet");

    let children = pet.typed_children();
    assert_eq!(children.type_names().collect::<Vec<_>>(), vec!["Dog", "Cat"]);
    assert_eq!(children.get("Dog").unwrap().get("name").unwrap().occurrences().len(), 2);
    assert_eq!(children.get("Cat").unwrap().get("name").unwrap().occurrences().len(), 1);
    assert_eq!(
        children.get("Cat").unwrap().get("name").unwrap().parent_type_name(),
        "Cat",
    );
}

#[test]
fn merging_empty_typed_children_is_identity() {
    let fixture = Fixture::new();
    let mut children = fixture.pet_field(&["Dog", "Cat"]).typed_children().clone();
    let before = children.clone();

    children.merge(TypedChildren::new());
    assert_eq!(children, before);

    let mut empty = TypedChildren::new();
    empty.merge(before.clone());
    assert_eq!(empty, before);
}

#[test]
fn display_renders_an_indented_tree() {
    let fixture = Fixture::new();
    let mut selection_map = SelectionMap::new();
    selection_map.insert_or_merge(fixture.scalar_field("renamed", vec![]));
    selection_map.insert_or_merge(fixture.pet_field(&["Dog"]));
    selection_map.insert_or_merge(fixture.pet_field(&["Cat"]));

    assert_eq!(selection_map.to_string(), concat!(
        "renamed: f -> Int\n",
        "pet -> Pet (x2)\n",
        "  ... on Dog\n",
        "    name -> String\n",
        "  ... on Cat\n",
        "    name -> String\n",
    ));
}

fn distinct_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..12).prop_map(|keys| {
        let mut seen = std::collections::HashSet::new();
        keys.into_iter().filter(|key| seen.insert(key.clone())).collect()
    })
}

proptest! {
    #[test]
    fn merging_disjoint_maps_is_lossless_and_ordered(
        keys in distinct_keys(),
        split in 0usize..12,
    ) {
        let fixture = Fixture::new();
        let split = split.min(keys.len());
        let (left_keys, right_keys) = keys.split_at(split);

        let mut left = SelectionMap::new();
        for key in left_keys {
            left.insert_or_merge(fixture.scalar_field(key, vec![]));
        }
        let mut right = SelectionMap::new();
        for key in right_keys {
            right.insert_or_merge(fixture.scalar_field(key, vec![]));
        }

        left.merge(right);

        prop_assert_eq!(left.keys().collect::<Vec<_>>(), keys.iter().map(|k| k.as_str()).collect::<Vec<_>>());
        prop_assert!(left.fields().all(|field| field.occurrences().len() == 1));
    }
}
