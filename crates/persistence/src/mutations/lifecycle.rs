// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cascade plan execution.
//!
//! The orchestrator walks a [`CascadePlan`] in order and records a
//! [`StepOutcome`] per step. Non-root step failures are logged and
//! skipped so one corrupt dependent row cannot wedge an entire cascade;
//! a root step failure aborts with an error because the root mutation is
//! the whole point of the command.
//!
//! Steps run outside a wrapping transaction on purpose: child steps are
//! idempotent set-level operations, the plan order keeps referential
//! consistency at every prefix, and a partial cascade is re-runnable.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, warn};

use crate::diesel_schema::{
    guide_hunters, hunters, hunting_reports, permit_requests, permits, taxes, users,
};
use crate::error::PersistenceError;
use chasse::{CascadeOutcome, CascadePlan, MutationStep, StepOutcome};
use chasse_domain::PermitStatus;

/// Executes a cascade plan step by step.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `plan` - The resolved plan to execute
///
/// # Errors
///
/// Returns an error only when the root (final) step fails; failures of
/// earlier steps are recorded as skipped in the outcome.
pub fn execute_plan(
    conn: &mut SqliteConnection,
    plan: &CascadePlan,
) -> Result<CascadeOutcome, PersistenceError> {
    let mut outcome = CascadeOutcome::default();

    for (index, step) in plan.steps().iter().enumerate() {
        match apply_step(conn, step) {
            Ok(rows_affected) => {
                debug!("Cascade step applied ({} rows): {}", rows_affected, step);
                outcome.record(*step, StepOutcome::Applied { rows_affected });
            }
            Err(e) if !plan.is_root_step(index) => {
                warn!("Skipping failed cascade step '{}': {}", step, e);
                outcome.record(
                    *step,
                    StepOutcome::Skipped {
                        reason: e.to_string(),
                    },
                );
            }
            Err(e) => {
                warn!("Root cascade step '{}' failed: {}", step, e);
                return Err(e);
            }
        }
    }

    Ok(outcome)
}

/// Applies one mutation step and returns the number of rows touched.
///
/// Root deletes and flag flips that touch zero rows mean the root entity
/// vanished between fact gathering and execution; that is surfaced as
/// [`PersistenceError::NotFound`] so `execute_plan` can treat it as a
/// root failure.
fn apply_step(
    conn: &mut SqliteConnection,
    step: &MutationStep,
) -> Result<usize, PersistenceError> {
    match step {
        MutationStep::SuspendActivePermits { hunter_id } => Ok(diesel::update(
            permits::table
                .filter(permits::hunter_id.eq(hunter_id))
                .filter(permits::status.eq(PermitStatus::Active.as_str())),
        )
        .set(permits::status.eq(PermitStatus::Suspended.as_str()))
        .execute(conn)?),
        MutationStep::DetachUsersFromHunter { hunter_id } => Ok(diesel::update(
            users::table.filter(users::hunter_id.eq(hunter_id)),
        )
        .set(users::hunter_id.eq(None::<i64>))
        .execute(conn)?),
        MutationStep::DeleteTaxesForHunter { hunter_id } => Ok(diesel::delete(
            taxes::table.filter(taxes::hunter_id.eq(hunter_id)),
        )
        .execute(conn)?),
        MutationStep::DeletePermitRequestsForHunter { hunter_id } => Ok(diesel::delete(
            permit_requests::table.filter(permit_requests::hunter_id.eq(hunter_id)),
        )
        .execute(conn)?),
        MutationStep::DeleteReportsForHunter { hunter_id } => Ok(diesel::delete(
            hunting_reports::table.filter(hunting_reports::hunter_id.eq(hunter_id)),
        )
        .execute(conn)?),
        MutationStep::DeleteHunter { hunter_id } => {
            let deleted =
                diesel::delete(hunters::table.filter(hunters::hunter_id.eq(hunter_id)))
                    .execute(conn)?;
            require_root_row(deleted, || format!("Hunter not found: {hunter_id}"))
        }
        MutationStep::MarkHunterInactive { hunter_id } => {
            let updated =
                diesel::update(hunters::table.filter(hunters::hunter_id.eq(hunter_id)))
                    .set(hunters::is_active.eq(0))
                    .execute(conn)?;
            require_root_row(updated, || format!("Hunter not found: {hunter_id}"))
        }
        MutationStep::MarkHunterActive { hunter_id } => {
            let updated =
                diesel::update(hunters::table.filter(hunters::hunter_id.eq(hunter_id)))
                    .set(hunters::is_active.eq(1))
                    .execute(conn)?;
            require_root_row(updated, || format!("Hunter not found: {hunter_id}"))
        }
        MutationStep::SuspendUsersOfHunter { hunter_id } => Ok(diesel::update(
            users::table.filter(users::hunter_id.eq(hunter_id)),
        )
        .set(users::is_suspended.eq(1))
        .execute(conn)?),
        MutationStep::ReactivateUsersOfHunter { hunter_id } => Ok(diesel::update(
            users::table.filter(users::hunter_id.eq(hunter_id)),
        )
        .set(users::is_suspended.eq(0))
        .execute(conn)?),
        MutationStep::ClearHunterReference { user_id } => Ok(diesel::update(
            users::table.filter(users::user_id.eq(user_id)),
        )
        .set(users::hunter_id.eq(None::<i64>))
        .execute(conn)?),
        MutationStep::DeletePermitRequestsByUser { user_id } => Ok(diesel::delete(
            permit_requests::table.filter(permit_requests::requested_by.eq(user_id)),
        )
        .execute(conn)?),
        MutationStep::DeleteUser { user_id } => {
            let deleted = diesel::delete(users::table.filter(users::user_id.eq(user_id)))
                .execute(conn)?;
            require_root_row(deleted, || format!("User not found: {user_id}"))
        }
        MutationStep::DeleteUsersOfGuide { guide_id } => Ok(diesel::delete(
            users::table.filter(users::guide_id.eq(guide_id)),
        )
        .execute(conn)?),
        MutationStep::DeleteGuideLinks { guide_id } => Ok(diesel::delete(
            guide_hunters::table.filter(guide_hunters::guide_id.eq(guide_id)),
        )
        .execute(conn)?),
        MutationStep::DeleteGuide { guide_id } => {
            let deleted = diesel::delete(
                crate::diesel_schema::hunting_guides::table
                    .filter(crate::diesel_schema::hunting_guides::guide_id.eq(guide_id)),
            )
            .execute(conn)?;
            require_root_row(deleted, || format!("Hunting guide not found: {guide_id}"))
        }
        MutationStep::DeletePermit { permit_id } => {
            let deleted =
                diesel::delete(permits::table.filter(permits::permit_id.eq(permit_id)))
                    .execute(conn)?;
            require_root_row(deleted, || format!("Permit not found: {permit_id}"))
        }
    }
}

fn require_root_row(
    rows: usize,
    message: impl FnOnce() -> String,
) -> Result<usize, PersistenceError> {
    if rows == 0 {
        return Err(PersistenceError::NotFound(message()));
    }
    Ok(rows)
}
