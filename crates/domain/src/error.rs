// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identity number is empty or malformed.
    InvalidIdentityNumber(String),
    /// Name is empty or invalid.
    InvalidName(String),
    /// Region identifier is empty or invalid.
    InvalidRegion(String),
    /// Hunter category string is not recognized.
    InvalidCategory(String),
    /// User role string is not recognized.
    InvalidRole(String),
    /// Permit status string is not recognized.
    InvalidPermitStatus(String),
    /// Permit request status string is not recognized.
    InvalidRequestStatus(String),
    /// Login name is empty or contains whitespace.
    InvalidLoginName(String),
    /// Monetary amount is negative.
    InvalidAmount {
        /// The offending amount in cents.
        cents: i64,
    },
    /// Permit expiry date does not follow its issue date.
    InvalidPermitDates {
        /// The permit issue date.
        issue_date: Date,
        /// The permit expiry date.
        expiry_date: Date,
    },
    /// Campaign end date precedes its start date.
    InvalidCampaignRange {
        /// The campaign start date.
        start_date: Date,
        /// The campaign end date.
        end_date: Date,
    },
    /// No active hunting campaign is configured.
    ///
    /// Date validation fails closed: a missing campaign rejects every
    /// candidate date rather than accepting any.
    NoCampaignConfigured,
    /// Candidate date falls outside the active campaign window.
    OutsideCampaignWindow {
        /// The campaign start date.
        start_date: Date,
        /// The campaign end date.
        end_date: Date,
        /// The rejected candidate date.
        candidate: Date,
    },
    /// A patch carries no fields to apply.
    EmptyPatch,
    /// A date string could not be parsed as ISO 8601.
    InvalidDate(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentityNumber(msg) => write!(f, "Invalid identity number: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRegion(msg) => write!(f, "Invalid region: {msg}"),
            Self::InvalidCategory(msg) => write!(f, "Invalid hunter category: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid user role: {msg}"),
            Self::InvalidPermitStatus(msg) => write!(f, "Invalid permit status: {msg}"),
            Self::InvalidRequestStatus(msg) => write!(f, "Invalid request status: {msg}"),
            Self::InvalidLoginName(msg) => write!(f, "Invalid login name: {msg}"),
            Self::InvalidAmount { cents } => write!(f, "Invalid amount: {cents} cents"),
            Self::InvalidPermitDates {
                issue_date,
                expiry_date,
            } => write!(
                f,
                "Permit expiry date {expiry_date} must follow issue date {issue_date}"
            ),
            Self::InvalidCampaignRange {
                start_date,
                end_date,
            } => write!(
                f,
                "Campaign end date {end_date} precedes start date {start_date}"
            ),
            Self::NoCampaignConfigured => {
                write!(f, "No active hunting campaign is configured")
            }
            Self::OutsideCampaignWindow {
                start_date,
                end_date,
                candidate,
            } => write!(
                f,
                "Date {candidate} is outside the campaign window [{start_date}, {end_date}]"
            ),
            Self::EmptyPatch => write!(f, "Patch contains no fields to apply"),
            Self::InvalidDate(msg) => write!(f, "Invalid date: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
