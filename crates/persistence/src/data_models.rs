// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and their conversions to domain types.
//!
//! Rows store enums and dates as text; conversion to domain types
//! happens here in one place so queries and mutations never hand raw
//! strings to callers.

use diesel::prelude::*;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::diesel_schema::{
    hunters, hunting_campaigns, hunting_guides, hunting_reports, permit_requests, permits, taxes,
    users,
};
use crate::error::PersistenceError;
use chasse_domain::{
    CampaignSettings, DomainError, Hunter, HuntingGuide, HuntingReport, Permit, PermitRequest,
    Tax, User,
};

/// Date columns are ISO 8601 calendar dates (`2025-01-04`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 date column.
///
/// # Errors
///
/// Returns a domain violation if the text is not a valid calendar date.
pub(crate) fn parse_date(text: &str) -> Result<Date, PersistenceError> {
    Date::parse(text, DATE_FORMAT)
        .map_err(|e| DomainError::InvalidDate(format!("'{text}': {e}")).into())
}

/// Formats a date for storage in an ISO 8601 text column.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("Invalid date '{date}': {e}")))
}

/// A user account together with its stored password hash.
///
/// The hash never travels on the domain `User` type; only credential
/// checks need it.
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// The user record.
    pub user: User,
    /// The stored bcrypt password hash.
    pub password_hash: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = hunters)]
pub(crate) struct HunterRow {
    pub(crate) hunter_id: i64,
    pub(crate) identity_number: String,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) region: String,
    pub(crate) is_active: i32,
    pub(crate) is_minor: i32,
}

impl HunterRow {
    pub(crate) fn into_domain(self) -> Result<Hunter, PersistenceError> {
        Ok(Hunter {
            id: self.hunter_id,
            identity_number: self.identity_number,
            name: self.name,
            category: self.category.parse()?,
            region: self.region,
            is_active: self.is_active != 0,
            is_minor: self.is_minor != 0,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub(crate) struct UserRow {
    pub(crate) user_id: i64,
    pub(crate) login_name: String,
    pub(crate) password_hash: String,
    pub(crate) role: String,
    pub(crate) hunter_id: Option<i64>,
    pub(crate) guide_id: Option<i64>,
    pub(crate) is_suspended: i32,
}

impl UserRow {
    pub(crate) fn into_domain(self) -> Result<User, PersistenceError> {
        Ok(User {
            id: self.user_id,
            login_name: self.login_name,
            role: self.role.parse()?,
            hunter_id: self.hunter_id,
            guide_id: self.guide_id,
            is_suspended: self.is_suspended != 0,
        })
    }

    pub(crate) fn into_account(self) -> Result<UserAccount, PersistenceError> {
        let password_hash = self.password_hash.clone();
        Ok(UserAccount {
            user: self.into_domain()?,
            password_hash,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = permits)]
pub(crate) struct PermitRow {
    pub(crate) permit_id: i64,
    pub(crate) hunter_id: i64,
    pub(crate) status: String,
    pub(crate) price_cents: i64,
    pub(crate) issue_date: String,
    pub(crate) expiry_date: String,
}

impl PermitRow {
    pub(crate) fn into_domain(self) -> Result<Permit, PersistenceError> {
        Ok(Permit {
            id: self.permit_id,
            hunter_id: self.hunter_id,
            status: self.status.parse()?,
            price_cents: self.price_cents,
            issue_date: parse_date(&self.issue_date)?,
            expiry_date: parse_date(&self.expiry_date)?,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = taxes)]
pub(crate) struct TaxRow {
    pub(crate) tax_id: i64,
    pub(crate) hunter_id: i64,
    pub(crate) permit_id: Option<i64>,
    pub(crate) amount_cents: i64,
    pub(crate) paid_on: Option<String>,
}

impl TaxRow {
    pub(crate) fn into_domain(self) -> Result<Tax, PersistenceError> {
        let paid_on = match self.paid_on {
            Some(text) => Some(parse_date(&text)?),
            None => None,
        };
        Ok(Tax {
            id: self.tax_id,
            hunter_id: self.hunter_id,
            permit_id: self.permit_id,
            amount_cents: self.amount_cents,
            paid_on,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = hunting_guides)]
pub(crate) struct GuideRow {
    pub(crate) guide_id: i64,
    pub(crate) identity_number: String,
    pub(crate) name: String,
}

impl GuideRow {
    pub(crate) fn into_domain(self) -> HuntingGuide {
        HuntingGuide {
            id: self.guide_id,
            identity_number: self.identity_number,
            name: self.name,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = permit_requests)]
pub(crate) struct PermitRequestRow {
    pub(crate) request_id: i64,
    pub(crate) hunter_id: i64,
    pub(crate) requested_by: i64,
    pub(crate) status: String,
}

impl PermitRequestRow {
    pub(crate) fn into_domain(self) -> Result<PermitRequest, PersistenceError> {
        Ok(PermitRequest {
            id: self.request_id,
            hunter_id: self.hunter_id,
            requested_by: self.requested_by,
            status: self.status.parse()?,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = hunting_reports)]
pub(crate) struct HuntingReportRow {
    pub(crate) report_id: i64,
    pub(crate) hunter_id: i64,
    pub(crate) report_date: String,
    pub(crate) species: String,
    pub(crate) quantity: i32,
}

impl HuntingReportRow {
    pub(crate) fn into_domain(self) -> Result<HuntingReport, PersistenceError> {
        Ok(HuntingReport {
            id: self.report_id,
            hunter_id: self.hunter_id,
            report_date: parse_date(&self.report_date)?,
            species: self.species,
            quantity: self.quantity,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = hunting_campaigns)]
pub(crate) struct CampaignRow {
    pub(crate) year: i32,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) is_active: i32,
}

impl CampaignRow {
    pub(crate) fn into_domain(self) -> Result<CampaignSettings, PersistenceError> {
        let year = u16::try_from(self.year).map_err(|_| {
            PersistenceError::SerializationError(format!("Invalid campaign year: {}", self.year))
        })?;
        CampaignSettings::new(
            year,
            parse_date(&self.start_date)?,
            parse_date(&self.end_date)?,
            self.is_active != 0,
        )
        .map_err(PersistenceError::from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{format_date, parse_date};
    use crate::PersistenceError;
    use chasse_domain::DomainError;
    use time::{Date, Month};

    #[test]
    fn test_date_columns_round_trip() {
        let date = Date::from_calendar_date(2025, Month::January, 4).unwrap();
        let text = format_date(date).unwrap();
        assert_eq!(text, "2025-01-04");
        assert_eq!(parse_date(&text).unwrap(), date);
    }

    #[test]
    fn test_malformed_date_column_is_a_domain_violation() {
        let err = parse_date("04/01/2025").unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::DomainViolation(DomainError::InvalidDate(_))
        ));
    }
}
