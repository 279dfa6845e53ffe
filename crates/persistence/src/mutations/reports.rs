// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permit requests and hunting reports.
//!
//! Report dates are validated against the active campaign window before
//! anything touches the database. No campaign configured means no
//! reports are accepted.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::info;

use crate::data_models::format_date;
use crate::diesel_schema::{hunting_reports, permit_requests};
use crate::error::PersistenceError;
use crate::sequencer::{self, Table};
use chasse_domain::{
    HuntingReport, PermitRequest, RequestStatus, validate_campaign_date, validate_name,
};

/// Files a permit request for a hunter on behalf of a user.
///
/// New requests start pending.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_permit_request(
    conn: &mut SqliteConnection,
    hunter_id: i64,
    requested_by: i64,
) -> Result<PermitRequest, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let request_id = sequencer::next_available_id(conn, Table::PermitRequests)?;

        diesel::insert_into(permit_requests::table)
            .values((
                permit_requests::request_id.eq(request_id),
                permit_requests::hunter_id.eq(hunter_id),
                permit_requests::requested_by.eq(requested_by),
                permit_requests::status.eq(RequestStatus::Pending.as_str()),
            ))
            .execute(conn)?;

        info!(
            "Created permit request {} for hunter {} by user {}",
            request_id, hunter_id, requested_by
        );
        Ok(PermitRequest {
            id: request_id,
            hunter_id,
            requested_by,
            status: RequestStatus::Pending,
        })
    })
}

/// Moves a permit request to a new status.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the request does not exist.
pub fn set_request_status(
    conn: &mut SqliteConnection,
    request_id: i64,
    status: RequestStatus,
) -> Result<(), PersistenceError> {
    let updated =
        diesel::update(permit_requests::table.filter(permit_requests::request_id.eq(request_id)))
            .set(permit_requests::status.eq(status.as_str()))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Permit request not found: {request_id}"
        )));
    }

    info!("Permit request {} moved to {}", request_id, status);
    Ok(())
}

/// Files a hunting report, rejecting dates outside the active campaign
/// window.
///
/// # Errors
///
/// Returns a domain error when the report date falls outside the
/// campaign window or no active campaign exists, or an error if the
/// insert fails.
pub fn create_hunting_report(
    conn: &mut SqliteConnection,
    hunter_id: i64,
    report_date: Date,
    species: &str,
    quantity: i32,
) -> Result<HuntingReport, PersistenceError> {
    validate_name(species)?;

    let campaign = crate::queries::campaign::get_campaign_settings(conn)?;
    validate_campaign_date(campaign.as_ref(), report_date)?;

    let date_text = format_date(report_date)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let report_id = sequencer::next_available_id(conn, Table::HuntingReports)?;

        diesel::insert_into(hunting_reports::table)
            .values((
                hunting_reports::report_id.eq(report_id),
                hunting_reports::hunter_id.eq(hunter_id),
                hunting_reports::report_date.eq(&date_text),
                hunting_reports::species.eq(species),
                hunting_reports::quantity.eq(quantity),
            ))
            .execute(conn)?;

        info!(
            "Created hunting report {} for hunter {} on {}",
            report_id, hunter_id, report_date
        );
        Ok(HuntingReport {
            id: report_id,
            hunter_id,
            report_date,
            species: species.to_string(),
            quantity,
        })
    })
}
