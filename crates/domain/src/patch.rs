// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partial-update patch types.
//!
//! A patch lists only the fields an update is allowed to change, each as
//! an `Option`. Patches are validated here before they reach the cascade
//! logic or the store; an all-`None` patch is rejected rather than
//! silently applied as a no-op.

use crate::error::DomainError;
use crate::types::{HunterCategory, UserRole};
use crate::validation::{validate_amount_cents, validate_name, validate_region};
use serde::Deserialize;
use time::Date;

/// Fields of a hunter that may be changed after registration.
///
/// The identity number is deliberately absent: it is immutable once
/// assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HunterPatch {
    /// New full name, if changing.
    pub name: Option<String>,
    /// New category, if changing.
    pub category: Option<HunterCategory>,
    /// New region, if changing.
    pub region: Option<String>,
    /// New minor flag, if changing.
    pub is_minor: Option<bool>,
}

impl HunterPatch {
    /// Returns whether the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.region.is_none()
            && self.is_minor.is_none()
    }

    /// Validates every field the patch carries.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch is empty or any provided field
    /// fails validation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyPatch);
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(region) = &self.region {
            validate_region(region)?;
        }
        Ok(())
    }
}

/// Fields of a permit that may be changed after issue.
///
/// Status is deliberately absent: status changes go through the
/// lifecycle operations (suspend, renew), never through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PermitPatch {
    /// New price in cents, if changing.
    pub price_cents: Option<i64>,
    /// New expiry date, if changing.
    pub expiry_date: Option<Date>,
}

impl PermitPatch {
    /// Returns whether the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.price_cents.is_none() && self.expiry_date.is_none()
    }

    /// Validates every field the patch carries.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch is empty or the price is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyPatch);
        }
        if let Some(cents) = self.price_cents {
            validate_amount_cents(cents)?;
        }
        Ok(())
    }
}

/// Fields of a user account that may be changed.
///
/// Hunter/guide references are deliberately absent: detachment is a
/// cascade step, never a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    /// New role, if changing.
    pub role: Option<UserRole>,
}

impl UserPatch {
    /// Returns whether the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.role.is_none()
    }

    /// Validates the patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch is empty.
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyPatch);
        }
        Ok(())
    }
}

/// Fields of a guide that may be changed after registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GuidePatch {
    /// New full name, if changing.
    pub name: Option<String>,
}

impl GuidePatch {
    /// Returns whether the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Validates the patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch is empty or the name is invalid.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyPatch);
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hunter_patch_is_rejected() {
        let patch = HunterPatch::default();
        assert_eq!(patch.validate(), Err(DomainError::EmptyPatch));
    }

    #[test]
    fn test_hunter_patch_validates_provided_fields() {
        let patch = HunterPatch {
            name: Some(String::new()),
            ..HunterPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn test_partial_hunter_patch_is_valid() {
        let patch = HunterPatch {
            region: Some(String::from("Province Nord")),
            ..HunterPatch::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_permit_patch_rejects_negative_price() {
        let patch = PermitPatch {
            price_cents: Some(-500),
            expiry_date: None,
        };
        assert!(matches!(
            patch.validate(),
            Err(DomainError::InvalidAmount { .. })
        ));
    }
}
