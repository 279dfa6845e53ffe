// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hunter deletion cascade tests.

use super::{add_hunter, date, test_storage};
use chasse_domain::{PermitStatus, UserRole};

#[test]
fn test_unforced_delete_blocked_by_active_permit_leaves_state_unchanged() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    storage.create_tax(hunter.id, Some(permit.id), 2_500).unwrap();

    assert!(!storage.delete_hunter(hunter.id, false).unwrap());

    // Hunter, permit, and tax are exactly as they were.
    assert!(storage.get_hunter(hunter.id).unwrap().is_some());
    let permit_after = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(permit_after.status, PermitStatus::Active);
    assert_eq!(storage.list_taxes_for_hunter(hunter.id).unwrap().len(), 1);
}

#[test]
fn test_forced_delete_removes_hunter_and_dependents() {
    let mut storage = test_storage();
    super::add_campaign(&mut storage);
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    storage.create_tax(hunter.id, Some(permit.id), 2_500).unwrap();
    let user = storage
        .create_user("hunter-nc-0001", "secret", UserRole::Hunter, Some(hunter.id), None)
        .unwrap();
    storage.create_permit_request(hunter.id, user.id).unwrap();
    storage
        .create_hunting_report(hunter.id, date(2025, 3, 1), "Rusa deer", 2)
        .unwrap();

    assert!(storage.delete_hunter(hunter.id, true).unwrap());

    assert!(storage.get_hunter(hunter.id).unwrap().is_none());
    assert!(storage.list_taxes_for_hunter(hunter.id).unwrap().is_empty());
    assert!(storage.list_requests_for_hunter(hunter.id).unwrap().is_empty());
    assert!(storage.list_reports_for_hunter(hunter.id).unwrap().is_empty());
}

#[test]
fn test_forced_delete_suspends_taxed_permits_instead_of_deleting() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    storage.create_tax(hunter.id, Some(permit.id), 2_500).unwrap();

    assert!(storage.delete_hunter(hunter.id, true).unwrap());

    // The permit survives the cascade, suspended rather than deleted.
    let permit_after = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(permit_after.status, PermitStatus::Suspended);
}

#[test]
fn test_users_are_detached_not_deleted_by_hunter_removal() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let user = storage
        .create_user("agent-nord", "secret", UserRole::Agent, Some(hunter.id), None)
        .unwrap();

    assert!(storage.delete_hunter(hunter.id, true).unwrap());

    // The account survives with its hunter reference cleared.
    let user_after = storage.get_user(user.id).unwrap().unwrap();
    assert_eq!(user_after.hunter_id, None);
}

#[test]
fn test_deleting_missing_hunter_reports_false() {
    let mut storage = test_storage();
    assert!(!storage.delete_hunter(42, false).unwrap());
    assert!(!storage.delete_hunter(42, true).unwrap());
}

#[test]
fn test_permit_delete_rejected_while_taxes_reference_it() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    let tax = storage.create_tax(hunter.id, Some(permit.id), 2_500).unwrap();

    assert!(!storage.delete_permit(permit.id).unwrap());
    assert!(storage.get_permit(permit.id).unwrap().is_some());

    // Removing the tax lifts the block.
    assert!(storage.delete_tax(tax.id).unwrap());
    assert!(storage.delete_permit(permit.id).unwrap());
    assert!(storage.get_permit(permit.id).unwrap().is_none());
}

#[test]
fn test_user_delete_detaches_hunter_and_removes_own_requests() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let user = storage
        .create_user("sub-agent", "secret", UserRole::SubAgent, Some(hunter.id), None)
        .unwrap();
    storage.create_permit_request(hunter.id, user.id).unwrap();

    assert!(storage.delete_user(user.id).unwrap());

    assert!(storage.get_user(user.id).unwrap().is_none());
    // The hunter is untouched; only the user's requests are gone.
    assert!(storage.get_hunter(hunter.id).unwrap().is_some());
    assert!(storage.list_requests_for_hunter(hunter.id).unwrap().is_empty());
}

#[test]
fn test_guide_delete_removes_account_and_links_but_not_hunters() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let guide = storage.create_hunting_guide("GD-0001", "Guide One").unwrap();
    let user = storage
        .create_user("guide-one", "secret", UserRole::Guide, None, Some(guide.id))
        .unwrap();
    storage.link_guide_hunter(guide.id, hunter.id).unwrap();

    assert!(storage.delete_hunting_guide(guide.id).unwrap());

    assert!(storage.get_hunting_guide(guide.id).unwrap().is_none());
    assert!(storage.get_user(user.id).unwrap().is_none());
    assert!(storage.list_hunters_of_guide(guide.id).unwrap().is_empty());
    assert!(storage.get_hunter(hunter.id).unwrap().is_some());
}

#[test]
fn test_delete_all_guides_reports_batch_counts() {
    let mut storage = test_storage();
    for n in 1..=3 {
        storage
            .create_hunting_guide(&format!("GD-{n:04}"), &format!("Guide {n}"))
            .unwrap();
    }

    let outcome = storage.delete_all_hunting_guides().unwrap();
    assert_eq!(outcome.successful, 3);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.total(), 3);
    assert!(storage.list_hunting_guides().unwrap().is_empty());
}

#[test]
fn test_delete_all_guides_on_empty_table_is_clean() {
    let mut storage = test_storage();
    let outcome = storage.delete_all_hunting_guides().unwrap();
    assert_eq!(outcome.total(), 0);
}
