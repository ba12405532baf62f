//! Behavior of the fixed-capacity array store.

use hexdemo_model::{HexColor, HexItem};
use hexdemo_store::{ArrayOp, ArrayStore, HexStore, Outcome, StoreError};

fn hex(letter: char, color: HexColor) -> Option<HexItem> {
    Some(HexItem::new(letter, color).unwrap())
}

fn red(letter: char) -> Option<HexItem> {
    hex(letter, HexColor::rgb(255, 0, 0))
}

fn filled(letters: &str, capacity: usize) -> ArrayStore {
    let mut store = ArrayStore::new(capacity);
    for (index, letter) in letters.chars().enumerate() {
        store.set_at(red(letter), index as i64).unwrap();
    }
    store
}

fn letters(store: &ArrayStore) -> String {
    store
        .entries()
        .iter()
        .map(|slot| slot.map_or('.', |item| item.letter()))
        .collect()
}

#[test]
fn new_store_is_empty_with_fixed_capacity() {
    let store = ArrayStore::new(5);
    assert_eq!(store.capacity(), 5);
    assert_eq!(store.count(), 0);
    assert!(store.entries().iter().all(Option::is_none));
}

#[test]
fn get_and_set_cover_whole_capacity() {
    let mut store = ArrayStore::new(4);
    assert_eq!(store.set_at(red('Q'), 3), Ok(None));
    assert_eq!(store.get_at(3), Ok(red('Q')));
    assert_eq!(store.get_at(2), Ok(None));
    assert_eq!(store.set_at(None, 3), Ok(red('Q')));
    assert_eq!(store.get_at(3), Ok(None));
}

#[test]
fn positional_access_outside_capacity_fails() {
    let mut store = filled("AB", 3);
    let before = store.clone();
    let out_of_range = StoreError::IndexOutOfRange { index: 3, end: 3 };
    assert_eq!(store.get_at(3), Err(out_of_range.clone()));
    assert_eq!(store.set_at(red('Z'), 3), Err(out_of_range.clone()));
    assert_eq!(store.remove_at(3), Err(out_of_range));
    assert_eq!(
        store.get_at(-1),
        Err(StoreError::IndexOutOfRange { index: -1, end: 3 })
    );
    assert_eq!(store, before);
}

#[test]
fn clear_empties_every_slot() {
    let mut store = filled("ABCD", 4);
    store.clear();
    assert_eq!(letters(&store), "....");
    assert_eq!(store.count(), 0);
}

#[test]
fn insert_shifts_later_entries_up() {
    let mut store = filled("ABC", 5);
    store.insert_at(red('X'), 1).unwrap();
    assert_eq!(letters(&store), "AXBC.");
    store.insert_at(red('Y'), 4).unwrap();
    assert_eq!(letters(&store), "AXBCY");
}

#[test]
fn insert_past_count_is_out_of_range() {
    let mut store = filled("AB", 5);
    assert_eq!(
        store.insert_at(red('X'), 3),
        Err(StoreError::IndexOutOfRange { index: 3, end: 3 })
    );
    assert_eq!(letters(&store), "AB...");
}

#[test]
fn insert_into_full_store_fails_without_shifting() {
    let mut store = filled("ABC", 3);
    assert_eq!(
        store.insert_at(red('X'), 0),
        Err(StoreError::CapacityExceeded { capacity: 3 })
    );
    assert_eq!(letters(&store), "ABC");
}

#[test]
fn insert_of_empty_item_is_refused() {
    let mut store = filled("AB", 4);
    assert_eq!(
        store.insert_at(None, 0),
        Err(StoreError::InvalidItem {
            operation: "array insert"
        })
    );
    assert_eq!(letters(&store), "AB..");
}

#[test]
fn repeated_insert_at_front_fills_then_fails() {
    let mut store = ArrayStore::new(5);
    for expected in 1..=5 {
        store.insert_at(red('A'), 0).unwrap();
        assert_eq!(store.count(), expected);
    }
    assert_eq!(
        store.insert_at(red('A'), 0),
        Err(StoreError::CapacityExceeded { capacity: 5 })
    );
    assert_eq!(store.count(), 5);
}

#[test]
fn remove_leaves_a_hole() {
    let mut store = filled("ABCD", 5);
    assert_eq!(store.remove_at(1), Ok(red('B')));
    assert_eq!(letters(&store), "A.CD.");
    assert_eq!(store.count(), 1);
    assert_eq!(store.get_at(2), Ok(red('C')));
}

#[test]
fn remove_and_shift_closes_the_gap() {
    let mut store = filled("ABCD", 5);
    assert_eq!(store.remove_at_and_shift(1), Ok(red('B')));
    assert_eq!(letters(&store), "ACD..");
    assert_eq!(store.remove_at_and_shift(2), Ok(red('D')));
    assert_eq!(letters(&store), "AC...");
}

#[test]
fn remove_and_shift_is_limited_to_count() {
    let mut store = filled("AB", 5);
    store.set_at(red('Z'), 3).unwrap();
    assert_eq!(
        store.remove_at_and_shift(2),
        Err(StoreError::IndexOutOfRange { index: 2, end: 2 })
    );
    assert_eq!(letters(&store), "AB.Z.");
}

#[test]
fn apply_dispatches_each_operation() {
    let mut store = ArrayStore::new(3);
    let item = hex('M', HexColor::rgb(0, 0, 255));
    assert_eq!(ArrayOp::InsertAt.apply(&mut store, 0, item), Ok(Outcome::Done));
    assert_eq!(ArrayOp::Count.apply(&mut store, -1, None), Ok(Outcome::Count(1)));
    assert_eq!(ArrayOp::GetAt.apply(&mut store, 0, None), Ok(Outcome::Item(item)));
    assert_eq!(
        ArrayOp::SetAt.apply(&mut store, 2, item),
        Ok(Outcome::Displaced(None))
    );
    assert_eq!(
        ArrayOp::RemoveAt.apply(&mut store, 2, None),
        Ok(Outcome::Displaced(item))
    );
    assert_eq!(
        ArrayOp::RemoveAtAndShift.apply(&mut store, 0, None),
        Ok(Outcome::Displaced(item))
    );
    assert_eq!(ArrayOp::Clear.apply(&mut store, 0, None), Ok(Outcome::Done));
    assert_eq!(
        ArrayOp::GetAt.apply(&mut store, 7, None),
        Err(StoreError::IndexOutOfRange { index: 7, end: 3 })
    );
}
