// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity sequencer tests: gap filling and resequencing.

use super::{add_hunter, date, test_storage};
use crate::{PersistenceError, Table};

#[test]
fn test_next_id_for_empty_table_is_one() {
    let mut storage = test_storage();
    assert_eq!(storage.next_available_id(Table::Hunters).unwrap(), 1);
}

#[test]
fn test_creates_assign_contiguous_ids() {
    let mut storage = test_storage();
    for n in 1..=4 {
        let hunter = add_hunter(&mut storage, &format!("NC-{n:04}"));
        assert_eq!(hunter.id, n);
    }
}

#[test]
fn test_next_id_fills_lowest_gap() {
    let mut storage = test_storage();
    for n in 1..=4 {
        add_hunter(&mut storage, &format!("NC-{n:04}"));
    }
    assert!(storage.delete_hunter(3, false).unwrap());

    assert_eq!(storage.next_available_id(Table::Hunters).unwrap(), 3);

    // The next create takes the freed id, not max + 1.
    let hunter = add_hunter(&mut storage, "NC-0005");
    assert_eq!(hunter.id, 3);
}

#[test]
fn test_next_id_for_contiguous_table_is_max_plus_one() {
    let mut storage = test_storage();
    for n in 1..=3 {
        add_hunter(&mut storage, &format!("NC-{n:04}"));
    }
    assert_eq!(storage.next_available_id(Table::Hunters).unwrap(), 4);
}

#[test]
fn test_resequencing_renumbers_preserving_order() {
    let mut storage = test_storage();
    for n in 1..=9 {
        add_hunter(&mut storage, &format!("NC-{n:04}"));
    }
    for id in [2, 4, 5, 6, 8] {
        assert!(storage.delete_hunter(id, false).unwrap());
    }
    // Remaining ids: {1, 3, 7, 9}.

    storage.resequence_ids(Table::Hunters).unwrap();

    let hunters = storage.list_hunters().unwrap();
    let ids: Vec<i64> = hunters.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    // Relative order of the survivors is preserved.
    let numbers: Vec<&str> = hunters.iter().map(|h| h.identity_number.as_str()).collect();
    assert_eq!(numbers, vec!["NC-0001", "NC-0003", "NC-0007", "NC-0009"]);
}

#[test]
fn test_next_id_after_resequencing_is_count_plus_one() {
    let mut storage = test_storage();
    for n in 1..=5 {
        add_hunter(&mut storage, &format!("NC-{n:04}"));
    }
    for id in [1, 4] {
        assert!(storage.delete_hunter(id, false).unwrap());
    }
    storage.resequence_ids(Table::Hunters).unwrap();

    assert_eq!(storage.next_available_id(Table::Hunters).unwrap(), 4);
}

#[test]
fn test_resequencing_refused_while_dependents_reference_table() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();

    let result = storage.resequence_ids(Table::Hunters);
    assert!(matches!(result, Err(PersistenceError::IntegrityError(_))));

    // Nothing was renumbered.
    assert!(storage.get_hunter(hunter.id).unwrap().is_some());
}

#[test]
fn test_leaf_table_resequences_despite_own_outbound_references() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    for _ in 0..3 {
        storage.create_tax(hunter.id, None, 2_500).unwrap();
    }
    assert!(storage.delete_tax(2).unwrap());

    storage.resequence_ids(Table::Taxes).unwrap();

    let taxes = storage.list_taxes_for_hunter(hunter.id).unwrap();
    let ids: Vec<i64> = taxes.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_resequencing_empty_table_is_a_no_op() {
    let mut storage = test_storage();
    storage.resequence_ids(Table::HuntingReports).unwrap();
    assert_eq!(
        storage.next_available_id(Table::HuntingReports).unwrap(),
        1
    );
}
