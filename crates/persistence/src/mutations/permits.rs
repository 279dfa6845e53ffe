// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permit creates, updates, and renewal.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::info;

use crate::data_models::format_date;
use crate::diesel_schema::permits;
use crate::error::PersistenceError;
use crate::sequencer::{self, Table};
use chasse_domain::{
    Permit, PermitPatch, PermitStatus, validate_amount_cents, validate_permit_dates,
};

#[derive(AsChangeset)]
#[diesel(table_name = permits)]
struct PermitChangeset {
    price_cents: Option<i64>,
    expiry_date: Option<String>,
}

/// Creates a permit for a hunter, assigning the lowest free identifier.
///
/// New permits start active. The caller verifies the owning hunter
/// exists; permits never reference a missing hunter.
///
/// # Errors
///
/// Returns an error if validation or the insert fails.
pub fn create_permit(
    conn: &mut SqliteConnection,
    hunter_id: i64,
    price_cents: i64,
    issue_date: Date,
    expiry_date: Date,
) -> Result<Permit, PersistenceError> {
    validate_amount_cents(price_cents)?;
    validate_permit_dates(issue_date, expiry_date)?;

    let issue_text = format_date(issue_date)?;
    let expiry_text = format_date(expiry_date)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let permit_id = sequencer::next_available_id(conn, Table::Permits)?;

        diesel::insert_into(permits::table)
            .values((
                permits::permit_id.eq(permit_id),
                permits::hunter_id.eq(hunter_id),
                permits::status.eq(PermitStatus::Active.as_str()),
                permits::price_cents.eq(price_cents),
                permits::issue_date.eq(&issue_text),
                permits::expiry_date.eq(&expiry_text),
            ))
            .execute(conn)?;

        info!("Created permit {} for hunter {}", permit_id, hunter_id);
        Ok(Permit {
            id: permit_id,
            hunter_id,
            status: PermitStatus::Active,
            price_cents,
            issue_date,
            expiry_date,
        })
    })
}

/// Applies a partial update to a permit.
///
/// Status and ownership are not patchable; suspension goes through the
/// lifecycle commands and renewal through [`renew_permit`].
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the permit does not exist.
pub fn update_permit(
    conn: &mut SqliteConnection,
    permit_id: i64,
    patch: &PermitPatch,
) -> Result<Permit, PersistenceError> {
    patch.validate()?;

    if let Some(price_cents) = patch.price_cents {
        validate_amount_cents(price_cents)?;
    }

    let current = crate::queries::permits::get_permit(conn, permit_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Permit not found: {permit_id}")))?;

    if let Some(expiry_date) = patch.expiry_date {
        validate_permit_dates(current.issue_date, expiry_date)?;
    }

    // One statement; a patch either applies whole or not at all.
    let changes = PermitChangeset {
        price_cents: patch.price_cents,
        expiry_date: patch.expiry_date.map(format_date).transpose()?,
    };
    let updated = diesel::update(permits::table.filter(permits::permit_id.eq(permit_id)))
        .set(changes)
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Permit not found: {permit_id}"
        )));
    }

    info!("Updated permit {}", permit_id);
    crate::queries::permits::get_permit(conn, permit_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Permit not found: {permit_id}")))
}

/// Renews a permit: sets a new expiry date and returns the permit to
/// active status.
///
/// Renewal is the only path back to active for a suspended or expired
/// permit; reactivating a hunter deliberately leaves permits alone.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the permit does not exist,
/// or a domain error if the new expiry is not after the issue date.
pub fn renew_permit(
    conn: &mut SqliteConnection,
    permit_id: i64,
    new_expiry_date: Date,
) -> Result<Permit, PersistenceError> {
    let current = crate::queries::permits::get_permit(conn, permit_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("Permit not found: {permit_id}")))?;

    validate_permit_dates(current.issue_date, new_expiry_date)?;
    let expiry_text = format_date(new_expiry_date)?;

    diesel::update(permits::table.filter(permits::permit_id.eq(permit_id)))
        .set((
            permits::status.eq(PermitStatus::Active.as_str()),
            permits::expiry_date.eq(&expiry_text),
        ))
        .execute(conn)?;

    info!("Renewed permit {} until {}", permit_id, new_expiry_date);
    Ok(Permit {
        status: PermitStatus::Active,
        expiry_date: new_expiry_date,
        ..current
    })
}
