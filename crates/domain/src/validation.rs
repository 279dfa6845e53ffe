// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation applied before any insert or patch reaches the store.

use crate::error::DomainError;
use time::Date;

/// Maximum length of an identity number.
const MAX_IDENTITY_NUMBER_LEN: usize = 32;

/// Maximum length of a name or region field.
const MAX_TEXT_LEN: usize = 128;

/// Validates a government identity number.
///
/// Identity numbers must be non-empty, alphanumeric (dashes allowed),
/// and at most 32 characters.
///
/// # Errors
///
/// Returns an error if the identity number is empty, too long, or
/// contains characters other than alphanumerics and dashes.
pub fn validate_identity_number(identity_number: &str) -> Result<(), DomainError> {
    let trimmed = identity_number.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidIdentityNumber(
            "identity number must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_IDENTITY_NUMBER_LEN {
        return Err(DomainError::InvalidIdentityNumber(format!(
            "identity number exceeds {MAX_IDENTITY_NUMBER_LEN} characters"
        )));
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(DomainError::InvalidIdentityNumber(format!(
            "identity number contains invalid characters: {trimmed}"
        )));
    }
    Ok(())
}

/// Validates a person or guide name.
///
/// # Errors
///
/// Returns an error if the name is empty or exceeds 128 characters.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(
            "name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TEXT_LEN {
        return Err(DomainError::InvalidName(format!(
            "name exceeds {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates a region or zone identifier.
///
/// # Errors
///
/// Returns an error if the region is empty or exceeds 128 characters.
pub fn validate_region(region: &str) -> Result<(), DomainError> {
    let trimmed = region.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidRegion(
            "region must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TEXT_LEN {
        return Err(DomainError::InvalidRegion(format!(
            "region exceeds {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates a login name.
///
/// Login names are normalized to uppercase by the store; validation only
/// requires them to be non-empty and free of whitespace.
///
/// # Errors
///
/// Returns an error if the login name is empty or contains whitespace.
pub fn validate_login_name(login_name: &str) -> Result<(), DomainError> {
    if login_name.is_empty() {
        return Err(DomainError::InvalidLoginName(
            "login name must not be empty".to_string(),
        ));
    }
    if login_name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidLoginName(format!(
            "login name must not contain whitespace: {login_name}"
        )));
    }
    Ok(())
}

/// Validates a monetary amount in cents.
///
/// # Errors
///
/// Returns an error if the amount is negative.
pub const fn validate_amount_cents(cents: i64) -> Result<(), DomainError> {
    if cents < 0 {
        return Err(DomainError::InvalidAmount { cents });
    }
    Ok(())
}

/// Validates a permit's issue/expiry date pair.
///
/// # Errors
///
/// Returns an error if the expiry date does not strictly follow the
/// issue date.
pub fn validate_permit_dates(issue_date: Date, expiry_date: Date) -> Result<(), DomainError> {
    if expiry_date <= issue_date {
        return Err(DomainError::InvalidPermitDates {
            issue_date,
            expiry_date,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_identity_number_accepts_alphanumerics_and_dashes() {
        assert!(validate_identity_number("NC-2024-00317").is_ok());
    }

    #[test]
    fn test_identity_number_rejects_empty() {
        assert!(validate_identity_number("  ").is_err());
    }

    #[test]
    fn test_identity_number_rejects_punctuation() {
        assert!(validate_identity_number("NC/2024").is_err());
    }

    #[test]
    fn test_login_name_rejects_whitespace() {
        assert!(validate_login_name("agent nord").is_err());
        assert!(validate_login_name("agent-nord").is_ok());
    }

    #[test]
    fn test_amount_rejects_negative() {
        assert!(validate_amount_cents(-1).is_err());
        assert!(validate_amount_cents(0).is_ok());
    }

    #[test]
    fn test_permit_dates_must_be_ordered() {
        let issue = Date::from_calendar_date(2025, Month::January, 10).unwrap();
        let expiry = Date::from_calendar_date(2025, Month::June, 10).unwrap();
        assert!(validate_permit_dates(issue, expiry).is_ok());
        assert!(validate_permit_dates(expiry, issue).is_err());
        assert!(validate_permit_dates(issue, issue).is_err());
    }
}
