// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gapless identity sequencing.
//!
//! Displayed identifiers are kept contiguous: inserts take the lowest
//! free integer, and an explicit maintenance operation renumbers a whole
//! table to `[1..count]` after deletions have left gaps.
//!
//! Table names are a closed enum, never strings: each variant maps at
//! compile time to its concrete Diesel table, so identifier
//! interpolation and typo'd table names are not expressible.
//!
//! Resequencing is a maintenance operation. It must not run concurrently
//! with live cascades on the same table; callers serialize it
//! operationally (maintenance window), not with an in-process lock.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::diesel_schema::{
    guide_hunters, hunters, hunting_guides, hunting_reports, permit_requests, permits, taxes,
    users,
};
use crate::error::PersistenceError;
use crate::sqlite::set_sequence_counter;

/// The closed set of tables whose primary keys are sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// The `hunters` table.
    Hunters,
    /// The `users` table.
    Users,
    /// The `permits` table.
    Permits,
    /// The `taxes` table.
    Taxes,
    /// The `hunting_guides` table.
    HuntingGuides,
    /// The `permit_requests` table.
    PermitRequests,
    /// The `hunting_reports` table.
    HuntingReports,
}

impl Table {
    /// Returns the SQL name of this table.
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::Hunters => "hunters",
            Self::Users => "users",
            Self::Permits => "permits",
            Self::Taxes => "taxes",
            Self::HuntingGuides => "hunting_guides",
            Self::PermitRequests => "permit_requests",
            Self::HuntingReports => "hunting_reports",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

/// Macro to generate monomorphic per-table primary-key helpers.
///
/// Diesel's type system requires concrete table types at compile time,
/// so the per-table load/reassign code cannot be written generically
/// over a runtime `Table` value. The macro only substitutes the table
/// and primary-key identifiers; no logic lives inside it.
macro_rules! table_pk_ops {
    ($(($variant:ident, $table:ident, $pk:ident)),+ $(,)?) => {
        /// Loads every primary key of the table in ascending order.
        fn load_ids(conn: &mut SqliteConnection, table: Table) -> Result<Vec<i64>, PersistenceError> {
            let ids = match table {
                $(Table::$variant => $table::table
                    .select($table::$pk)
                    .order($table::$pk.asc())
                    .load::<i64>(conn)?,)+
            };
            Ok(ids)
        }

        /// Reassigns one primary key value.
        fn reassign_id(
            conn: &mut SqliteConnection,
            table: Table,
            old_id: i64,
            new_id: i64,
        ) -> Result<(), PersistenceError> {
            match table {
                $(Table::$variant => {
                    diesel::update($table::table.filter($table::$pk.eq(old_id)))
                        .set($table::$pk.eq(new_id))
                        .execute(conn)?;
                })+
            }
            Ok(())
        }
    };
}

table_pk_ops!(
    (Hunters, hunters, hunter_id),
    (Users, users, user_id),
    (Permits, permits, permit_id),
    (Taxes, taxes, tax_id),
    (HuntingGuides, hunting_guides, guide_id),
    (PermitRequests, permit_requests, request_id),
    (HuntingReports, hunting_reports, report_id),
);

/// Returns the lowest positive integer not currently used as a primary
/// key in `table`.
///
/// Returns 1 for an empty table; otherwise the smallest missing integer
/// in `[1, max]`, or `max + 1` when the range is already contiguous.
///
/// This is a pure read. Callers that insert with the returned value must
/// wrap the computation and the insert in one transaction so two callers
/// cannot receive the same identifier.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `table` - The table to scan
///
/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn next_available_id(
    conn: &mut SqliteConnection,
    table: Table,
) -> Result<i64, PersistenceError> {
    let ids = load_ids(conn, table)?;
    Ok(first_gap(&ids))
}

/// Finds the first gap in a sorted list of positive identifiers.
fn first_gap(sorted_ids: &[i64]) -> i64 {
    let mut expected: i64 = 1;
    for id in sorted_ids {
        if *id > expected {
            break;
        }
        if *id == expected {
            expected += 1;
        }
    }
    expected
}

/// Renumbers every row of `table` to a contiguous `[1..count]` range,
/// preserving the relative order of the current keys, then advances the
/// table's auto-increment counter to `count`.
///
/// Runs in a single transaction: a failure partway through rolls the
/// table back unchanged, since partial renumbering would corrupt
/// references held by dependent tables.
///
/// Refuses with [`PersistenceError::IntegrityError`] when dependent
/// tables still hold references into `table`; cross-table renumbering is
/// not attempted.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `table` - The table to renumber
///
/// # Errors
///
/// Returns an error if dependent references exist or the transaction
/// fails.
pub fn resequence_ids(conn: &mut SqliteConnection, table: Table) -> Result<(), PersistenceError> {
    info!("Resequencing primary keys of table: {}", table);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if let Some(dependent) = find_dependent_references(conn, table)? {
            return Err(PersistenceError::IntegrityError(format!(
                "Cannot resequence {table}: rows in {dependent} still reference it"
            )));
        }

        let ids = load_ids(conn, table)?;

        // Ranks are assigned in ascending key order and every new key is
        // <= its old key, so reassignment never collides with a not-yet-
        // renumbered row.
        for (index, old_id) in ids.iter().enumerate() {
            let new_id = i64::try_from(index).map_err(|_| {
                PersistenceError::Other(format!("Row count overflow in table {table}"))
            })? + 1;
            if new_id != *old_id {
                debug!("Reassigning {} id {} -> {}", table, old_id, new_id);
                reassign_id(conn, table, *old_id, new_id)?;
            }
        }

        let count = i64::try_from(ids.len())
            .map_err(|_| PersistenceError::Other(format!("Row count overflow in table {table}")))?;
        set_sequence_counter(conn, table.table_name(), count)?;

        info!("Resequenced {} rows in table: {}", ids.len(), table);
        Ok(())
    })
}

/// Returns the name of a dependent table that still references rows of
/// `table`, if any.
///
/// Leaf tables (taxes, permit requests, hunting reports) have no
/// dependents and can always be renumbered.
fn find_dependent_references(
    conn: &mut SqliteConnection,
    table: Table,
) -> Result<Option<&'static str>, PersistenceError> {
    match table {
        Table::Hunters => {
            let permit_refs: i64 = permits::table.count().get_result(conn)?;
            if permit_refs > 0 {
                return Ok(Some("permits"));
            }
            let tax_refs: i64 = taxes::table.count().get_result(conn)?;
            if tax_refs > 0 {
                return Ok(Some("taxes"));
            }
            let user_refs: i64 = users::table
                .filter(users::hunter_id.is_not_null())
                .count()
                .get_result(conn)?;
            if user_refs > 0 {
                return Ok(Some("users"));
            }
            let link_refs: i64 = guide_hunters::table.count().get_result(conn)?;
            if link_refs > 0 {
                return Ok(Some("guide_hunters"));
            }
            let request_refs: i64 = permit_requests::table.count().get_result(conn)?;
            if request_refs > 0 {
                return Ok(Some("permit_requests"));
            }
            let report_refs: i64 = hunting_reports::table.count().get_result(conn)?;
            if report_refs > 0 {
                return Ok(Some("hunting_reports"));
            }
            Ok(None)
        }
        Table::Users => {
            let request_refs: i64 = permit_requests::table.count().get_result(conn)?;
            if request_refs > 0 {
                return Ok(Some("permit_requests"));
            }
            Ok(None)
        }
        Table::Permits => {
            let tax_refs: i64 = taxes::table
                .filter(taxes::permit_id.is_not_null())
                .count()
                .get_result(conn)?;
            if tax_refs > 0 {
                return Ok(Some("taxes"));
            }
            Ok(None)
        }
        Table::HuntingGuides => {
            let link_refs: i64 = guide_hunters::table.count().get_result(conn)?;
            if link_refs > 0 {
                return Ok(Some("guide_hunters"));
            }
            let user_refs: i64 = users::table
                .filter(users::guide_id.is_not_null())
                .count()
                .get_result(conn)?;
            if user_refs > 0 {
                return Ok(Some("users"));
            }
            Ok(None)
        }
        Table::Taxes | Table::PermitRequests | Table::HuntingReports => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::first_gap;

    #[test]
    fn test_first_gap_of_empty_list_is_one() {
        assert_eq!(first_gap(&[]), 1);
    }

    #[test]
    fn test_first_gap_fills_holes() {
        assert_eq!(first_gap(&[1, 2, 4]), 3);
        assert_eq!(first_gap(&[2, 3, 4]), 1);
        assert_eq!(first_gap(&[1, 3, 7, 9]), 2);
    }

    #[test]
    fn test_first_gap_of_contiguous_range_is_max_plus_one() {
        assert_eq!(first_gap(&[1, 2, 3]), 4);
    }
}
