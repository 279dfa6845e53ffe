// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permit and tax reads.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{PermitRow, TaxRow};
use crate::diesel_schema::{permits, taxes};
use crate::error::PersistenceError;
use chasse_domain::{Permit, PermitStatus, Tax};

/// Fetches a permit by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_permit(
    conn: &mut SqliteConnection,
    permit_id: i64,
) -> Result<Option<Permit>, PersistenceError> {
    let row = permits::table
        .filter(permits::permit_id.eq(permit_id))
        .select(PermitRow::as_select())
        .first::<PermitRow>(conn)
        .optional()?;

    row.map(PermitRow::into_domain).transpose()
}

/// Lists every permit owned by a hunter, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_permits_for_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<Vec<Permit>, PersistenceError> {
    let rows = permits::table
        .filter(permits::hunter_id.eq(hunter_id))
        .order(permits::permit_id.asc())
        .select(PermitRow::as_select())
        .load::<PermitRow>(conn)?;

    rows.into_iter().map(PermitRow::into_domain).collect()
}

/// Counts the active (stored status, not effective status) permits a
/// hunter owns.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_active_permits(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = permits::table
        .filter(permits::hunter_id.eq(hunter_id))
        .filter(permits::status.eq(PermitStatus::Active.as_str()))
        .count()
        .get_result(conn)?;

    usize::try_from(count)
        .map_err(|_| PersistenceError::Other(format!("Negative permit count: {count}")))
}

/// Counts the taxes referencing a permit.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_taxes_for_permit(
    conn: &mut SqliteConnection,
    permit_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = taxes::table
        .filter(taxes::permit_id.eq(permit_id))
        .count()
        .get_result(conn)?;

    usize::try_from(count)
        .map_err(|_| PersistenceError::Other(format!("Negative tax count: {count}")))
}

/// Returns whether a permit row exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn permit_exists(
    conn: &mut SqliteConnection,
    permit_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = permits::table
        .filter(permits::permit_id.eq(permit_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Fetches a tax record by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_tax(conn: &mut SqliteConnection, tax_id: i64) -> Result<Option<Tax>, PersistenceError> {
    let row = taxes::table
        .filter(taxes::tax_id.eq(tax_id))
        .select(TaxRow::as_select())
        .first::<TaxRow>(conn)
        .optional()?;

    row.map(TaxRow::into_domain).transpose()
}
