// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Campaign window validation.
//!
//! A hunting campaign defines the single `[start_date, end_date]` window
//! that bounds date fields on dependent records (hunting reports, species
//! sub-seasons). Validation is pure: it never mutates, and it fails closed
//! when no campaign is configured.

use crate::error::DomainError;
use time::Date;

/// Settings of a hunting campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSettings {
    /// The campaign year (the year the campaign opens).
    pub year: u16,
    /// First day of the campaign (inclusive).
    pub start_date: Date,
    /// Last day of the campaign (inclusive).
    pub end_date: Date,
    /// Whether this campaign is the currently active one.
    pub is_active: bool,
}

impl CampaignSettings {
    /// Creates campaign settings, validating the date range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end_date` precedes `start_date`.
    pub fn new(
        year: u16,
        start_date: Date,
        end_date: Date,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidCampaignRange {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            year,
            start_date,
            end_date,
            is_active,
        })
    }

    /// Returns whether `date` falls inside the campaign window (inclusive
    /// on both ends).
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Validates a candidate date against the active campaign window.
///
/// # Arguments
///
/// * `campaign` - The currently active campaign settings, if any
/// * `candidate` - The date to validate
///
/// # Errors
///
/// * [`DomainError::NoCampaignConfigured`] when `campaign` is `None` or
///   the provided campaign is not active (fail closed)
/// * [`DomainError::OutsideCampaignWindow`] when the candidate falls
///   outside `[start_date, end_date]`, with the bounds in the reason
pub fn validate_campaign_date(
    campaign: Option<&CampaignSettings>,
    candidate: Date,
) -> Result<(), DomainError> {
    let Some(campaign) = campaign.filter(|c| c.is_active) else {
        return Err(DomainError::NoCampaignConfigured);
    };

    if !campaign.contains(candidate) {
        return Err(DomainError::OutsideCampaignWindow {
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            candidate,
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    fn campaign() -> CampaignSettings {
        CampaignSettings::new(
            2025,
            Date::from_calendar_date(2025, Month::January, 4).unwrap(),
            Date::from_calendar_date(2025, Month::June, 25).unwrap(),
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_date_inside_window_is_accepted() {
        let candidate = Date::from_calendar_date(2025, Month::March, 1).unwrap();
        assert!(validate_campaign_date(Some(&campaign()), candidate).is_ok());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let c = campaign();
        assert!(validate_campaign_date(Some(&c), c.start_date).is_ok());
        assert!(validate_campaign_date(Some(&c), c.end_date).is_ok());
    }

    #[test]
    fn test_date_after_window_is_rejected_with_bounds() {
        let candidate = Date::from_calendar_date(2025, Month::July, 1).unwrap();
        let err = validate_campaign_date(Some(&campaign()), candidate).unwrap_err();
        match err {
            DomainError::OutsideCampaignWindow {
                start_date,
                end_date,
                candidate: rejected,
            } => {
                assert_eq!(start_date, campaign().start_date);
                assert_eq!(end_date, campaign().end_date);
                assert_eq!(rejected, candidate);
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_date_before_window_is_rejected() {
        let candidate = Date::from_calendar_date(2025, Month::January, 3).unwrap();
        let result = validate_campaign_date(Some(&campaign()), candidate);
        assert!(matches!(
            result,
            Err(DomainError::OutsideCampaignWindow { .. })
        ));
    }

    #[test]
    fn test_missing_campaign_rejects_any_date() {
        let candidate = Date::from_calendar_date(2025, Month::March, 1).unwrap();
        let result = validate_campaign_date(None, candidate);
        assert_eq!(result, Err(DomainError::NoCampaignConfigured));
    }

    #[test]
    fn test_inactive_campaign_rejects_any_date() {
        let mut c = campaign();
        c.is_active = false;
        let candidate = Date::from_calendar_date(2025, Month::March, 1).unwrap();
        let result = validate_campaign_date(Some(&c), candidate);
        assert_eq!(result, Err(DomainError::NoCampaignConfigured));
    }

    #[test]
    fn test_reversed_range_is_rejected_at_construction() {
        let result = CampaignSettings::new(
            2025,
            Date::from_calendar_date(2025, Month::June, 25).unwrap(),
            Date::from_calendar_date(2025, Month::January, 4).unwrap(),
            true,
        );
        assert!(matches!(
            result,
            Err(DomainError::InvalidCampaignRange { .. })
        ));
    }
}
