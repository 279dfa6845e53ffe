// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hunter reads, plus the dependent records filed against a hunter.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{HunterRow, HuntingReportRow, PermitRequestRow, TaxRow};
use crate::diesel_schema::{hunters, hunting_reports, permit_requests, taxes};
use crate::error::PersistenceError;
use chasse_domain::{Hunter, HuntingReport, PermitRequest, Tax};

/// Fetches a hunter by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<Option<Hunter>, PersistenceError> {
    let row = hunters::table
        .filter(hunters::hunter_id.eq(hunter_id))
        .select(HunterRow::as_select())
        .first::<HunterRow>(conn)
        .optional()?;

    row.map(HunterRow::into_domain).transpose()
}

/// Fetches a hunter by identity number.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_hunter_by_identity_number(
    conn: &mut SqliteConnection,
    identity_number: &str,
) -> Result<Option<Hunter>, PersistenceError> {
    let row = hunters::table
        .filter(hunters::identity_number.eq(identity_number))
        .select(HunterRow::as_select())
        .first::<HunterRow>(conn)
        .optional()?;

    row.map(HunterRow::into_domain).transpose()
}

/// Lists every hunter, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_hunters(conn: &mut SqliteConnection) -> Result<Vec<Hunter>, PersistenceError> {
    let rows = hunters::table
        .order(hunters::hunter_id.asc())
        .select(HunterRow::as_select())
        .load::<HunterRow>(conn)?;

    rows.into_iter().map(HunterRow::into_domain).collect()
}

/// Returns whether a hunter row exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn hunter_exists(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = hunters::table
        .filter(hunters::hunter_id.eq(hunter_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Lists every tax owed by a hunter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_taxes_for_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<Vec<Tax>, PersistenceError> {
    let rows = taxes::table
        .filter(taxes::hunter_id.eq(hunter_id))
        .order(taxes::tax_id.asc())
        .select(TaxRow::as_select())
        .load::<TaxRow>(conn)?;

    rows.into_iter().map(TaxRow::into_domain).collect()
}

/// Lists every permit request filed for a hunter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_requests_for_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<Vec<PermitRequest>, PersistenceError> {
    let rows = permit_requests::table
        .filter(permit_requests::hunter_id.eq(hunter_id))
        .order(permit_requests::request_id.asc())
        .select(PermitRequestRow::as_select())
        .load::<PermitRequestRow>(conn)?;

    rows.into_iter()
        .map(PermitRequestRow::into_domain)
        .collect()
}

/// Lists every hunting report filed for a hunter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_reports_for_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<Vec<HuntingReport>, PersistenceError> {
    let rows = hunting_reports::table
        .filter(hunting_reports::hunter_id.eq(hunter_id))
        .order(hunting_reports::report_id.asc())
        .select(HuntingReportRow::as_select())
        .load::<HuntingReportRow>(conn)?;

    rows.into_iter()
        .map(HuntingReportRow::into_domain)
        .collect()
}
