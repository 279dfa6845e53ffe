// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fact gathering for cascade resolution.
//!
//! The resolver is pure; this module snapshots the store state its
//! preconditions depend on.

use diesel::SqliteConnection;

use crate::error::PersistenceError;
use crate::queries::{guides, hunters, permits, users};
use chasse::{CascadeFacts, LifecycleCommand};

/// Gathers the facts a command's resolution depends on.
///
/// # Errors
///
/// Returns an error if any lookup fails.
pub fn for_command(
    conn: &mut SqliteConnection,
    command: LifecycleCommand,
) -> Result<CascadeFacts, PersistenceError> {
    match command {
        LifecycleCommand::DeleteHunter { hunter_id, .. }
        | LifecycleCommand::SuspendHunter { hunter_id }
        | LifecycleCommand::ReactivateHunter { hunter_id } => {
            let root_exists = hunters::hunter_exists(conn, hunter_id)?;
            let active_permit_count = if root_exists {
                permits::count_active_permits(conn, hunter_id)?
            } else {
                0
            };
            Ok(CascadeFacts::for_hunter(root_exists, active_permit_count))
        }
        LifecycleCommand::DeleteUser { user_id } => {
            Ok(CascadeFacts::for_root(users::user_exists(conn, user_id)?))
        }
        LifecycleCommand::DeleteGuide { guide_id } => Ok(CascadeFacts::for_root(
            guides::guide_exists(conn, guide_id)?,
        )),
        LifecycleCommand::DeletePermit { permit_id } => {
            let root_exists = permits::permit_exists(conn, permit_id)?;
            let tax_count = if root_exists {
                permits::count_taxes_for_permit(conn, permit_id)?
            } else {
                0
            };
            Ok(CascadeFacts::for_permit(root_exists, tax_count))
        }
    }
}
