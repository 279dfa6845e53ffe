// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hunting guide reads.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::GuideRow;
use crate::diesel_schema::{guide_hunters, hunting_guides};
use crate::error::PersistenceError;
use chasse_domain::HuntingGuide;

/// Fetches a guide by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_guide(
    conn: &mut SqliteConnection,
    guide_id: i64,
) -> Result<Option<HuntingGuide>, PersistenceError> {
    let row = hunting_guides::table
        .filter(hunting_guides::guide_id.eq(guide_id))
        .select(GuideRow::as_select())
        .first::<GuideRow>(conn)
        .optional()?;

    Ok(row.map(GuideRow::into_domain))
}

/// Lists every guide, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_guides(conn: &mut SqliteConnection) -> Result<Vec<HuntingGuide>, PersistenceError> {
    let rows = hunting_guides::table
        .order(hunting_guides::guide_id.asc())
        .select(GuideRow::as_select())
        .load::<GuideRow>(conn)?;

    Ok(rows.into_iter().map(GuideRow::into_domain).collect())
}

/// Lists every guide identifier, ordered ascending.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_guide_ids(conn: &mut SqliteConnection) -> Result<Vec<i64>, PersistenceError> {
    Ok(hunting_guides::table
        .select(hunting_guides::guide_id)
        .order(hunting_guides::guide_id.asc())
        .load::<i64>(conn)?)
}

/// Returns whether a guide row exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn guide_exists(conn: &mut SqliteConnection, guide_id: i64) -> Result<bool, PersistenceError> {
    let count: i64 = hunting_guides::table
        .filter(hunting_guides::guide_id.eq(guide_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Lists the hunters associated with a guide.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_hunter_ids_of_guide(
    conn: &mut SqliteConnection,
    guide_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    Ok(guide_hunters::table
        .filter(guide_hunters::guide_id.eq(guide_id))
        .order(guide_hunters::link_id.asc())
        .select(guide_hunters::hunter_id)
        .load::<i64>(conn)?)
}
