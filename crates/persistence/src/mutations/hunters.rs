// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hunter creates and updates.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::hunters;
use crate::error::PersistenceError;
use crate::sequencer::{self, Table};
use chasse_domain::{
    Hunter, HunterCategory, HunterPatch, validate_identity_number, validate_name, validate_region,
};

#[derive(AsChangeset)]
#[diesel(table_name = hunters)]
struct HunterChangeset {
    name: Option<String>,
    category: Option<String>,
    region: Option<String>,
    is_minor: Option<i32>,
}

/// Creates a hunter, assigning the lowest free identifier.
///
/// The identifier computation and the insert run in one transaction so a
/// concurrent create cannot claim the same number.
///
/// # Errors
///
/// Returns an error if validation or the insert fails.
pub fn create_hunter(
    conn: &mut SqliteConnection,
    identity_number: &str,
    name: &str,
    category: HunterCategory,
    region: &str,
    is_minor: bool,
) -> Result<Hunter, PersistenceError> {
    validate_identity_number(identity_number)?;
    validate_name(name)?;
    validate_region(region)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let hunter_id = sequencer::next_available_id(conn, Table::Hunters)?;

        diesel::insert_into(hunters::table)
            .values((
                hunters::hunter_id.eq(hunter_id),
                hunters::identity_number.eq(identity_number),
                hunters::name.eq(name),
                hunters::category.eq(category.as_str()),
                hunters::region.eq(region),
                hunters::is_active.eq(1),
                hunters::is_minor.eq(i32::from(is_minor)),
            ))
            .execute(conn)?;

        info!("Created hunter {} ({})", hunter_id, identity_number);
        Ok(Hunter {
            id: hunter_id,
            identity_number: identity_number.to_string(),
            name: name.to_string(),
            category,
            region: region.to_string(),
            is_active: true,
            is_minor,
        })
    })
}

/// Applies a partial update to a hunter.
///
/// The identity number is immutable and absent from the patch type.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the hunter does not exist,
/// or an error if validation or the update fails.
pub fn update_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
    patch: &HunterPatch,
) -> Result<Hunter, PersistenceError> {
    patch.validate()?;

    let changes = HunterChangeset {
        name: patch.name.clone(),
        category: patch.category.map(|c| c.as_str().to_string()),
        region: patch.region.clone(),
        is_minor: patch.is_minor.map(i32::from),
    };

    let updated = diesel::update(hunters::table.filter(hunters::hunter_id.eq(hunter_id)))
        .set(changes)
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Hunter not found: {hunter_id}"
        )));
    }

    info!("Updated hunter {}", hunter_id);
    crate::queries::hunters::get_hunter(conn, hunter_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Hunter not found: {hunter_id}")))
}
