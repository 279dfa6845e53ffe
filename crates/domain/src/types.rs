// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Classification of a hunter with respect to permit and tax rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HunterCategory {
    /// A hunter residing in the regulated territory.
    Resident,
    /// A customary-rights hunter; taxed externally, may hold no permit.
    Customary,
    /// A visiting hunter on a short-term permit.
    Tourist,
}

impl FromStr for HunterCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resident" => Ok(Self::Resident),
            "customary" => Ok(Self::Customary),
            "tourist" => Ok(Self::Tourist),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for HunterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl HunterCategory {
    /// Converts this category to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Customary => "customary",
            Self::Tourist => "tourist",
        }
    }
}

/// A registered hunter.
///
/// Hunters are the root entity of the permit cascade: permits, taxes,
/// permit requests, and hunting reports all hang off a hunter row, and
/// user accounts may reference one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The government identity number (unique).
    pub identity_number: String,
    /// The hunter's full name.
    pub name: String,
    /// The hunter's category.
    pub category: HunterCategory,
    /// The region or zone the hunter is registered in.
    pub region: String,
    /// Whether the hunter is active (false when suspended).
    pub is_active: bool,
    /// Whether the hunter is a minor.
    pub is_minor: bool,
}

/// Stored status of a permit.
///
/// `expired` is never stored; it is observed at query time by comparing
/// the expiry date to the current date. See [`EffectivePermitStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermitStatus {
    /// The permit is valid (subject to its expiry date).
    Active,
    /// The permit has been suspended; requires an explicit renewal to
    /// return to active.
    Suspended,
}

impl FromStr for PermitStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            _ => Err(DomainError::InvalidPermitStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PermitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PermitStatus {
    /// Converts this status to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

/// Status of a permit as observed at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectivePermitStatus {
    /// Stored active and not yet past its expiry date.
    Active,
    /// Stored suspended. Suspension dominates expiry: a suspended permit
    /// stays suspended until explicitly renewed.
    Suspended,
    /// Stored active but past its expiry date.
    Expired,
}

/// A hunting permit owned by exactly one hunter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permit {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The owning hunter's identifier.
    pub hunter_id: i64,
    /// The stored status.
    pub status: PermitStatus,
    /// The permit price in cents.
    pub price_cents: i64,
    /// The date the permit was issued.
    pub issue_date: Date,
    /// The date the permit expires.
    pub expiry_date: Date,
}

impl Permit {
    /// Returns the status of this permit as observed on `today`.
    ///
    /// Expiry is computed, never stored: an active permit whose expiry
    /// date has passed reads as expired without any background process
    /// transitioning it.
    #[must_use]
    pub fn effective_status(&self, today: Date) -> EffectivePermitStatus {
        match self.status {
            PermitStatus::Suspended => EffectivePermitStatus::Suspended,
            PermitStatus::Active if self.expiry_date < today => EffectivePermitStatus::Expired,
            PermitStatus::Active => EffectivePermitStatus::Active,
        }
    }
}

/// A hunting tax owed by a hunter.
///
/// Externally-taxed hunters (customary category) carry taxes with no
/// associated permit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tax {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The hunter this tax is levied on.
    pub hunter_id: i64,
    /// The permit this tax is attached to, if any.
    pub permit_id: Option<i64>,
    /// The tax amount in cents.
    pub amount_cents: i64,
    /// The date the tax was paid, if paid.
    pub paid_on: Option<Date>,
}

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// A regional agent.
    Agent,
    /// A sub-agent working under an agent.
    SubAgent,
    /// A hunter-facing account referencing a hunter record.
    Hunter,
    /// A guide-facing account referencing a guide record.
    Guide,
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "agent" => Ok(Self::Agent),
            "sub_agent" => Ok(Self::SubAgent),
            "hunter" => Ok(Self::Hunter),
            "guide" => Ok(Self::Guide),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl UserRole {
    /// Converts this role to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::SubAgent => "sub_agent",
            Self::Hunter => "hunter",
            Self::Guide => "guide",
        }
    }
}

/// A user account.
///
/// A user does not own a hunter or guide; it merely references one. The
/// cascade rules guarantee the references are cleared before the target
/// row is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The login name (normalized uppercase, unique).
    pub login_name: String,
    /// The account role.
    pub role: UserRole,
    /// Weak reference to a hunter record, if any.
    pub hunter_id: Option<i64>,
    /// Weak reference to a guide record, if any.
    pub guide_id: Option<i64>,
    /// Whether the account is suspended.
    pub is_suspended: bool,
}

/// A registered hunting guide.
///
/// Guides are an independent identity entity. A user account may link to
/// a guide via `User::guide_id`; guide-hunter associations are stored as
/// separate link rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntingGuide {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The government identity number (unique).
    pub identity_number: String,
    /// The guide's full name.
    pub name: String,
}

/// Status of a permit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting review.
    Pending,
    /// Approved; a permit has been or will be issued.
    Approved,
    /// Rejected.
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RequestStatus {
    /// Converts this status to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A request for a new permit, filed by a user on behalf of a hunter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitRequest {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The hunter the permit is requested for.
    pub hunter_id: i64,
    /// The user account that filed the request.
    pub requested_by: i64,
    /// The request status.
    pub status: RequestStatus,
}

/// A hunting report filed for a hunter.
///
/// Report dates are bounded by the active campaign window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntingReport {
    /// The canonical numeric identifier assigned by the store.
    pub id: i64,
    /// The hunter the report concerns.
    pub hunter_id: i64,
    /// The date of the hunt.
    pub report_date: Date,
    /// The species taken.
    pub species: String,
    /// The number of animals taken.
    pub quantity: i32,
}
