// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tax record creates and payment marking.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::info;

use crate::data_models::format_date;
use crate::diesel_schema::taxes;
use crate::error::PersistenceError;
use crate::sequencer::{self, Table};
use chasse_domain::{Tax, validate_amount_cents};

/// Creates a tax record for a hunter, assigning the lowest free
/// identifier.
///
/// `permit_id` optionally ties the tax to a specific permit; a tied
/// permit cannot be hard-deleted until the tax record is removed.
///
/// # Errors
///
/// Returns an error if validation or the insert fails.
pub fn create_tax(
    conn: &mut SqliteConnection,
    hunter_id: i64,
    permit_id: Option<i64>,
    amount_cents: i64,
) -> Result<Tax, PersistenceError> {
    validate_amount_cents(amount_cents)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let tax_id = sequencer::next_available_id(conn, Table::Taxes)?;

        diesel::insert_into(taxes::table)
            .values((
                taxes::tax_id.eq(tax_id),
                taxes::hunter_id.eq(hunter_id),
                taxes::permit_id.eq(permit_id),
                taxes::amount_cents.eq(amount_cents),
                taxes::paid_on.eq(None::<String>),
            ))
            .execute(conn)?;

        info!("Created tax {} for hunter {}", tax_id, hunter_id);
        Ok(Tax {
            id: tax_id,
            hunter_id,
            permit_id,
            amount_cents,
            paid_on: None,
        })
    })
}

/// Marks a tax as paid on the given date.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the tax does not exist.
pub fn mark_tax_paid(
    conn: &mut SqliteConnection,
    tax_id: i64,
    paid_on: Date,
) -> Result<(), PersistenceError> {
    let paid_text = format_date(paid_on)?;

    let updated = diesel::update(taxes::table.filter(taxes::tax_id.eq(tax_id)))
        .set(taxes::paid_on.eq(Some(paid_text)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Tax not found: {tax_id}"
        )));
    }

    info!("Marked tax {} paid on {}", tax_id, paid_on);
    Ok(())
}

/// Deletes a single tax record.
///
/// Removing the tax lifts the hard-delete block on any permit it
/// referenced.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_tax(conn: &mut SqliteConnection, tax_id: i64) -> Result<bool, PersistenceError> {
    let deleted = diesel::delete(taxes::table.filter(taxes::tax_id.eq(tax_id))).execute(conn)?;
    if deleted > 0 {
        info!("Deleted tax {}", tax_id);
    }
    Ok(deleted > 0)
}
