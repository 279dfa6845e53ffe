// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hunting guide creates, updates, and hunter associations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::{guide_hunters, hunting_guides};
use crate::error::PersistenceError;
use crate::sequencer::{self, Table};
use chasse_domain::{GuidePatch, HuntingGuide, validate_identity_number, validate_name};

/// Creates a hunting guide, assigning the lowest free identifier.
///
/// # Errors
///
/// Returns an error if validation or the insert fails.
pub fn create_guide(
    conn: &mut SqliteConnection,
    identity_number: &str,
    name: &str,
) -> Result<HuntingGuide, PersistenceError> {
    validate_identity_number(identity_number)?;
    validate_name(name)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let guide_id = sequencer::next_available_id(conn, Table::HuntingGuides)?;

        diesel::insert_into(hunting_guides::table)
            .values((
                hunting_guides::guide_id.eq(guide_id),
                hunting_guides::identity_number.eq(identity_number),
                hunting_guides::name.eq(name),
            ))
            .execute(conn)?;

        info!("Created hunting guide {} ({})", guide_id, identity_number);
        Ok(HuntingGuide {
            id: guide_id,
            identity_number: identity_number.to_string(),
            name: name.to_string(),
        })
    })
}

/// Applies a partial update to a guide.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the guide does not exist.
pub fn update_guide(
    conn: &mut SqliteConnection,
    guide_id: i64,
    patch: &GuidePatch,
) -> Result<HuntingGuide, PersistenceError> {
    patch.validate()?;

    let updated = match &patch.name {
        Some(name) => diesel::update(hunting_guides::table.filter(hunting_guides::guide_id.eq(guide_id)))
            .set(hunting_guides::name.eq(name))
            .execute(conn)?,
        None => 0,
    };

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Hunting guide not found: {guide_id}"
        )));
    }

    info!("Updated hunting guide {}", guide_id);
    crate::queries::guides::get_guide(conn, guide_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Hunting guide not found: {guide_id}")))
}

/// Associates a hunter with a guide.
///
/// The association is idempotent: linking an already-linked pair is a
/// no-op.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn link_hunter(
    conn: &mut SqliteConnection,
    guide_id: i64,
    hunter_id: i64,
) -> Result<(), PersistenceError> {
    let existing: i64 = guide_hunters::table
        .filter(guide_hunters::guide_id.eq(guide_id))
        .filter(guide_hunters::hunter_id.eq(hunter_id))
        .count()
        .get_result(conn)?;
    if existing > 0 {
        return Ok(());
    }

    diesel::insert_into(guide_hunters::table)
        .values((
            guide_hunters::guide_id.eq(guide_id),
            guide_hunters::hunter_id.eq(hunter_id),
        ))
        .execute(conn)?;

    info!("Linked hunter {} to guide {}", hunter_id, guide_id);
    Ok(())
}

/// Removes the association between a hunter and a guide.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn unlink_hunter(
    conn: &mut SqliteConnection,
    guide_id: i64,
    hunter_id: i64,
) -> Result<bool, PersistenceError> {
    let deleted = diesel::delete(
        guide_hunters::table
            .filter(guide_hunters::guide_id.eq(guide_id))
            .filter(guide_hunters::hunter_id.eq(hunter_id)),
    )
    .execute(conn)?;

    if deleted > 0 {
        info!("Unlinked hunter {} from guide {}", hunter_id, guide_id);
    }
    Ok(deleted > 0)
}
