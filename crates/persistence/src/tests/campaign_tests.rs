// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Campaign settings and report-date validation tests.

use super::{add_campaign, add_hunter, date, test_storage};
use crate::PersistenceError;
use chasse_domain::{CampaignSettings, DomainError};

#[test]
fn test_no_campaign_configured_rejects_every_report() {
    let mut storage = test_storage();
    let hunter = add_hunter(&mut storage, "NC-0001");

    let result = storage.create_hunting_report(hunter.id, date(2025, 3, 1), "Rusa deer", 1);
    assert!(matches!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::NoCampaignConfigured
        ))
    ));
}

#[test]
fn test_report_inside_window_is_accepted() {
    let mut storage = test_storage();
    add_campaign(&mut storage);
    let hunter = add_hunter(&mut storage, "NC-0001");

    let report = storage
        .create_hunting_report(hunter.id, date(2025, 3, 1), "Rusa deer", 2)
        .unwrap();
    assert_eq!(report.report_date, date(2025, 3, 1));
    assert_eq!(storage.list_reports_for_hunter(hunter.id).unwrap().len(), 1);
}

#[test]
fn test_report_outside_window_is_rejected_with_bounds() {
    let mut storage = test_storage();
    add_campaign(&mut storage);
    let hunter = add_hunter(&mut storage, "NC-0001");

    let result = storage.create_hunting_report(hunter.id, date(2025, 7, 1), "Rusa deer", 1);
    match result {
        Err(PersistenceError::DomainViolation(DomainError::OutsideCampaignWindow {
            start_date,
            end_date,
            candidate,
        })) => {
            assert_eq!(start_date, date(2025, 1, 4));
            assert_eq!(end_date, date(2025, 6, 25));
            assert_eq!(candidate, date(2025, 7, 1));
        }
        other => panic!("Unexpected result: {other:?}"),
    }
    assert!(storage.list_reports_for_hunter(hunter.id).unwrap().is_empty());
}

#[test]
fn test_window_bounds_are_inclusive_through_storage() {
    let mut storage = test_storage();
    add_campaign(&mut storage);
    let hunter = add_hunter(&mut storage, "NC-0001");

    storage
        .create_hunting_report(hunter.id, date(2025, 1, 4), "Notou pigeon", 1)
        .unwrap();
    storage
        .create_hunting_report(hunter.id, date(2025, 6, 25), "Notou pigeon", 1)
        .unwrap();
    assert_eq!(storage.list_reports_for_hunter(hunter.id).unwrap().len(), 2);
}

#[test]
fn test_validate_report_date_fails_closed_without_campaign() {
    let mut storage = test_storage();
    let result = storage.validate_report_date(date(2025, 3, 1));
    assert!(matches!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::NoCampaignConfigured
        ))
    ));
}

#[test]
fn test_save_campaign_settings_round_trips() {
    let mut storage = test_storage();
    let saved = add_campaign(&mut storage);

    let loaded = storage.get_campaign_settings().unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.year, 2025);
    assert_eq!(loaded.start_date, date(2025, 1, 4));
    assert_eq!(loaded.end_date, date(2025, 6, 25));
}

#[test]
fn test_saving_a_year_twice_overwrites_the_window() {
    let mut storage = test_storage();
    add_campaign(&mut storage);

    let revised = CampaignSettings::new(2025, date(2025, 2, 1), date(2025, 7, 15), true).unwrap();
    storage.save_campaign_settings(&revised).unwrap();

    let loaded = storage.get_campaign_settings().unwrap().unwrap();
    assert_eq!(loaded.start_date, date(2025, 2, 1));
    assert_eq!(loaded.end_date, date(2025, 7, 15));
}

#[test]
fn test_activating_a_new_campaign_deactivates_the_previous_one() {
    let mut storage = test_storage();
    add_campaign(&mut storage);

    let next = CampaignSettings::new(2026, date(2026, 1, 3), date(2026, 6, 24), true).unwrap();
    storage.save_campaign_settings(&next).unwrap();

    let active = storage.get_campaign_settings().unwrap().unwrap();
    assert_eq!(active.year, 2026);

    // The old campaign no longer validates report dates.
    let hunter = add_hunter(&mut storage, "NC-0001");
    let result = storage.create_hunting_report(hunter.id, date(2025, 3, 1), "Rusa deer", 1);
    assert!(matches!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::OutsideCampaignWindow { .. }
        ))
    ));
}

#[test]
fn test_inactive_campaign_save_does_not_become_the_window() {
    let mut storage = test_storage();
    let dormant = CampaignSettings::new(2024, date(2024, 1, 6), date(2024, 6, 20), false).unwrap();
    storage.save_campaign_settings(&dormant).unwrap();

    assert!(storage.get_campaign_settings().unwrap().is_none());
}
