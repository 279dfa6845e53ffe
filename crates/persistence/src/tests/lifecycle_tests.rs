// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Suspension, reactivation, renewal, and account tests.

use super::{add_hunter, date, test_storage};
use crate::PersistenceError;
use chasse_domain::{
    EffectivePermitStatus, HunterPatch, PermitPatch, PermitStatus, UserPatch, UserRole,
};

#[test]
fn test_suspend_hunter_suspends_permits_and_users() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    let user = storage
        .create_user("hunter-nc", "secret", UserRole::Hunter, Some(hunter.id), None)
        .unwrap();

    let suspended = storage.suspend_hunter(hunter.id).unwrap().unwrap();
    assert!(!suspended.is_active);

    let permit_after = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(permit_after.status, PermitStatus::Suspended);
    assert!(storage.get_user(user.id).unwrap().unwrap().is_suspended);
}

#[test]
fn test_reactivation_restores_hunter_and_users_but_not_permits() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    let user = storage
        .create_user("hunter-nc", "secret", UserRole::Hunter, Some(hunter.id), None)
        .unwrap();
    storage.suspend_hunter(hunter.id).unwrap();

    let reactivated = storage.reactivate_hunter(hunter.id).unwrap().unwrap();
    assert!(reactivated.is_active);
    assert!(!storage.get_user(user.id).unwrap().unwrap().is_suspended);

    // Permits stay suspended until explicitly renewed.
    let permit_after = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(permit_after.status, PermitStatus::Suspended);
}

#[test]
fn test_suspending_missing_hunter_is_none() {
    let mut storage = test_storage();
    assert!(storage.suspend_hunter(42).unwrap().is_none());
    assert!(storage.reactivate_hunter(42).unwrap().is_none());
}

#[test]
fn test_renewal_returns_suspended_permit_to_active() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();
    storage.suspend_hunter(hunter.id).unwrap();

    let renewed = storage.renew_permit(permit.id, date(2026, 6, 10)).unwrap();
    assert_eq!(renewed.status, PermitStatus::Active);
    assert_eq!(renewed.expiry_date, date(2026, 6, 10));

    let stored = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(stored.status, PermitStatus::Active);
    assert_eq!(stored.expiry_date, date(2026, 6, 10));
}

#[test]
fn test_effective_status_reports_expiry_and_suspension() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();

    let stored = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(
        stored.effective_status(date(2025, 3, 1)),
        EffectivePermitStatus::Active
    );
    assert_eq!(
        stored.effective_status(date(2025, 7, 1)),
        EffectivePermitStatus::Expired
    );

    // Suspension dominates expiry.
    storage.suspend_hunter(hunter.id).unwrap();
    let suspended = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(
        suspended.effective_status(date(2025, 7, 1)),
        EffectivePermitStatus::Suspended
    );
}

#[test]
fn test_hunter_patch_updates_only_named_fields() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");

    let patch = HunterPatch {
        region: Some(String::from("Province Sud")),
        ..HunterPatch::default()
    };
    let updated = storage.update_hunter(hunter.id, &patch).unwrap();

    assert_eq!(updated.region, "Province Sud");
    assert_eq!(updated.name, hunter.name);
    assert_eq!(updated.identity_number, hunter.identity_number);
}

#[test]
fn test_permit_patch_applies_price_and_expiry_together() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();

    let patch = PermitPatch {
        price_cents: Some(18_000),
        expiry_date: Some(date(2025, 12, 31)),
    };
    let updated = storage.update_permit(permit.id, &patch).unwrap();
    assert_eq!(updated.price_cents, 18_000);
    assert_eq!(updated.expiry_date, date(2025, 12, 31));

    let stored = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(stored.price_cents, 18_000);
    assert_eq!(stored.expiry_date, date(2025, 12, 31));
}

#[test]
fn test_rejected_permit_patch_changes_nothing() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let permit = storage
        .create_permit(hunter.id, 15_000, date(2025, 1, 10), date(2025, 6, 10))
        .unwrap();

    // Expiry before issue rejects the whole patch, price included.
    let patch = PermitPatch {
        price_cents: Some(18_000),
        expiry_date: Some(date(2025, 1, 1)),
    };
    let result = storage.update_permit(permit.id, &patch);
    assert!(matches!(result, Err(PersistenceError::DomainViolation(_))));

    let stored = storage.get_permit(permit.id).unwrap().unwrap();
    assert_eq!(stored.price_cents, 15_000);
    assert_eq!(stored.expiry_date, date(2025, 6, 10));
}

#[test]
fn test_empty_patch_is_rejected() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");

    let result = storage.update_hunter(hunter.id, &HunterPatch::default());
    assert!(matches!(result, Err(PersistenceError::DomainViolation(_))));
}

#[test]
fn test_password_verification_and_suspension() {
    let mut storage = test_storage();
    let user = storage
        .create_user("agent-nord", "hunting-2025", UserRole::Agent, None, None)
        .unwrap();

    assert!(storage.verify_password("agent-nord", "hunting-2025").unwrap());
    assert!(storage.verify_password("AGENT-NORD", "hunting-2025").unwrap());
    assert!(!storage.verify_password("agent-nord", "wrong").unwrap());
    assert!(!storage.verify_password("unknown", "hunting-2025").unwrap());

    // Suspended accounts never verify.
    storage.suspend_user(user.id).unwrap();
    assert!(!storage.verify_password("agent-nord", "hunting-2025").unwrap());

    storage.reactivate_user(user.id).unwrap();
    assert!(storage.verify_password("agent-nord", "hunting-2025").unwrap());
}

#[test]
fn test_password_update_invalidates_old_password() {
    let mut storage = test_storage();
    let user = storage
        .create_user("agent-nord", "old-secret", UserRole::Agent, None, None)
        .unwrap();

    storage.update_password(user.id, "new-secret").unwrap();

    assert!(!storage.verify_password("agent-nord", "old-secret").unwrap());
    assert!(storage.verify_password("agent-nord", "new-secret").unwrap());
}

#[test]
fn test_user_role_patch() {
    let mut storage = test_storage();
    let user = storage
        .create_user("agent-nord", "secret", UserRole::SubAgent, None, None)
        .unwrap();

    let patch = UserPatch {
        role: Some(UserRole::Agent),
    };
    let updated = storage.update_user(user.id, &patch).unwrap();
    assert_eq!(updated.role, UserRole::Agent);
}

#[test]
fn test_create_user_rejects_missing_hunter_reference() {
    let mut storage = test_storage();
    let result = storage.create_user("orphan", "secret", UserRole::Hunter, Some(42), None);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_create_permit_rejects_missing_hunter() {
    let mut storage = test_storage();
    let result = storage.create_permit(42, 15_000, date(2025, 1, 10), date(2025, 6, 10));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_permit_dates_must_be_ordered_at_creation() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");
    let result = storage.create_permit(hunter.id, 15_000, date(2025, 6, 10), date(2025, 1, 10));
    assert!(matches!(result, Err(PersistenceError::DomainViolation(_))));
}
