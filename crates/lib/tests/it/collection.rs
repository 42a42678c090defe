//! Tests for the Collection container.

use roster::{Collection, collection};

use crate::helpers::*;

#[test]
fn builds_from_iterators_vecs_and_the_macro() {
    let collected = seeded([1, 2, 3]);
    let from_vec = Collection::from(vec![ticket(1), ticket(2), ticket(3)]);
    let from_macro = collection![ticket(1), ticket(2), ticket(3)];

    assert_eq!(collected, from_vec);
    assert_eq!(collected, from_macro);
}

#[test]
fn empty_forms_agree() {
    let new: Collection<Ticket> = Collection::new();
    let default: Collection<Ticket> = Collection::default();
    let empty_macro: Collection<Ticket> = collection![];

    assert!(new.is_empty());
    assert_eq!(new, default);
    assert_eq!(new, empty_macro);
    assert_eq!(new.len(), 0);
}

#[test]
fn preserves_insertion_order() {
    let collection = seeded([5, 3, 9, 1]);
    assert_eq!(ids(&collection), vec![5, 3, 9, 1]);
}

#[test]
fn get_is_bounds_checked() {
    let collection = seeded([1, 2]);
    assert_eq!(collection.get(0), Some(&ticket(1)));
    assert_eq!(collection.get(1), Some(&ticket(2)));
    assert_eq!(collection.get(2), None);
}

#[test]
fn to_vec_round_trips_through_from() {
    let collection = seeded([4, 5, 6]);
    let vec = collection.to_vec();
    assert_eq!(Collection::from(vec), collection);
}

#[test]
fn equality_ignores_how_a_collection_was_built() {
    let a = seeded([1, 2]);
    let b: Collection<Ticket> = [ticket(1), ticket(2)].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, seeded([2, 1]));
}

#[test]
fn clones_are_equal_values() {
    let original = seeded([1, 2, 3]);
    let cloned = original.clone();
    assert_eq!(cloned, original);
    assert_eq!(ids(&cloned), ids(&original));
}
