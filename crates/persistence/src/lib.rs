// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Hunting Permit Administration System.
//!
//! This crate provides `SQLite`-backed storage for hunters, permits,
//! taxes, user accounts, hunting guides, permit requests, hunting
//! reports, and campaign settings. It is built on Diesel with embedded
//! migrations.
//!
//! The [`Storage`] adapter is the only public entry point. Lifecycle
//! commands (deletes, suspensions) flow through the pure resolver in
//! the `chasse` crate: the adapter gathers facts, resolves a cascade
//! plan, and executes it step by step. Blocked operations surface as
//! `Ok(false)` / `Ok(None)`, never as panics; only root-mutation
//! failures surface as `Err`.
//!
//! Displayed identifiers are gapless: creates assign the lowest free
//! integer inside the insert transaction, and [`Storage::resequence_ids`]
//! renumbers a table to `[1..count]` as an explicit maintenance step.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use time::Date;
use tracing::info;

use chasse::{
    BatchOutcome, CascadeOutcome, CoreError, LifecycleCommand, resolve,
};
use chasse_domain::{
    CampaignSettings, GuidePatch, Hunter, HunterCategory, HunterPatch, HuntingGuide,
    HuntingReport, Permit, PermitPatch, PermitRequest, RequestStatus, Tax, User, UserPatch,
    UserRole, validate_campaign_date,
};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sequencer;
mod sqlite;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

pub use data_models::UserAccount;
pub use error::PersistenceError;
pub use sequencer::Table;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Storage adapter for the permit administration system.
///
/// Owns a single `SQLite` connection; in-process callers are serialized
/// by `&mut self`. Concurrent same-root updates are last-write-wins.
pub struct Storage {
    conn: SqliteConnection,
}

impl Storage {
    /// Creates a storage adapter backed by an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn = sqlite::initialize_database(&shared_memory_url)?;
        Ok(Self { conn })
    }

    /// Creates a storage adapter backed by a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases
        sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Lifecycle commands
    // ========================================================================

    /// Deletes a hunter and its dependent records.
    ///
    /// Without `force`, the delete is refused while the hunter owns
    /// active permits. With `force`, owned permits are suspended and
    /// retained, taxes/requests/reports are deleted, and referencing
    /// users are detached before the hunter row is removed.
    ///
    /// # Returns
    ///
    /// `false` when the hunter does not exist or the delete is blocked.
    ///
    /// # Errors
    ///
    /// Returns an error only when the root mutation itself fails.
    pub fn delete_hunter(&mut self, hunter_id: i64, force: bool) -> Result<bool, PersistenceError> {
        let outcome = self.run_lifecycle(LifecycleCommand::DeleteHunter { hunter_id, force })?;
        Ok(outcome.is_some())
    }

    /// Suspends a hunter: marks it inactive, suspends its active permits
    /// and its user accounts.
    ///
    /// # Returns
    ///
    /// The updated hunter, or `None` when the hunter does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only when the root mutation itself fails.
    pub fn suspend_hunter(&mut self, hunter_id: i64) -> Result<Option<Hunter>, PersistenceError> {
        let outcome = self.run_lifecycle(LifecycleCommand::SuspendHunter { hunter_id })?;
        if outcome.is_none() {
            return Ok(None);
        }
        queries::hunters::get_hunter(&mut self.conn, hunter_id)
    }

    /// Reactivates a suspended hunter and lifts the suspension on its
    /// user accounts.
    ///
    /// Permits stay suspended; renewing a permit is a separate, explicit
    /// operation ([`Storage::renew_permit`]).
    ///
    /// # Returns
    ///
    /// The updated hunter, or `None` when the hunter does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only when the root mutation itself fails.
    pub fn reactivate_hunter(
        &mut self,
        hunter_id: i64,
    ) -> Result<Option<Hunter>, PersistenceError> {
        let outcome = self.run_lifecycle(LifecycleCommand::ReactivateHunter { hunter_id })?;
        if outcome.is_none() {
            return Ok(None);
        }
        queries::hunters::get_hunter(&mut self.conn, hunter_id)
    }

    /// Deletes a user account, detaching (never deleting) any referenced
    /// hunter and removing the requests the user filed.
    ///
    /// # Returns
    ///
    /// `false` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only when the root mutation itself fails.
    pub fn delete_user(&mut self, user_id: i64) -> Result<bool, PersistenceError> {
        let outcome = self.run_lifecycle(LifecycleCommand::DeleteUser { user_id })?;
        Ok(outcome.is_some())
    }

    /// Deletes a hunting guide, its linked user account, and its
    /// guide-hunter associations. Associated hunters are untouched.
    ///
    /// # Returns
    ///
    /// `false` when the guide does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only when the root mutation itself fails.
    pub fn delete_hunting_guide(&mut self, guide_id: i64) -> Result<bool, PersistenceError> {
        let outcome = self.run_lifecycle(LifecycleCommand::DeleteGuide { guide_id })?;
        Ok(outcome.is_some())
    }

    /// Deletes every hunting guide, cascading each one independently.
    ///
    /// One failed guide does not stop the batch; the outcome carries the
    /// success and failure counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the guide list cannot be read.
    pub fn delete_all_hunting_guides(&mut self) -> Result<BatchOutcome, PersistenceError> {
        let guide_ids = queries::guides::list_guide_ids(&mut self.conn)?;
        let mut outcome = BatchOutcome::default();

        for guide_id in guide_ids {
            match self.delete_hunting_guide(guide_id) {
                Ok(true) => outcome.successful += 1,
                Ok(false) => outcome.failed += 1,
                Err(e) => {
                    info!("Batch guide delete failed for guide {}: {}", guide_id, e);
                    outcome.failed += 1;
                }
            }
        }

        info!(
            "Batch guide delete: {} succeeded, {} failed",
            outcome.successful, outcome.failed
        );
        Ok(outcome)
    }

    /// Deletes a permit.
    ///
    /// Refused while any tax record references the permit; there is no
    /// force flag for taxed permits.
    ///
    /// # Returns
    ///
    /// `false` when the permit does not exist or taxes block the delete.
    ///
    /// # Errors
    ///
    /// Returns an error only when the root mutation itself fails.
    pub fn delete_permit(&mut self, permit_id: i64) -> Result<bool, PersistenceError> {
        let outcome = self.run_lifecycle(LifecycleCommand::DeletePermit { permit_id })?;
        Ok(outcome.is_some())
    }

    /// Resolves and executes one lifecycle command.
    ///
    /// `Ok(None)` means the command was refused (missing root or a
    /// blocked precondition) and nothing was mutated.
    fn run_lifecycle(
        &mut self,
        command: LifecycleCommand,
    ) -> Result<Option<CascadeOutcome>, PersistenceError> {
        let facts = queries::facts::for_command(&mut self.conn, command)?;

        let plan = match resolve(command, &facts) {
            Ok(plan) => plan,
            Err(e @ CoreError::RootNotFound { .. }) => {
                info!("Lifecycle command is a no-op: {}", e);
                return Ok(None);
            }
            Err(e) if e.is_precondition_failure() => {
                info!("Lifecycle command refused: {}", e);
                return Ok(None);
            }
            Err(CoreError::DomainViolation(e)) => return Err(e.into()),
            Err(e) => return Err(PersistenceError::Other(e.to_string())),
        };

        info!(
            "Executing lifecycle command against {} {}",
            command.root_entity(),
            command.root_id()
        );
        let outcome = mutations::lifecycle::execute_plan(&mut self.conn, &plan)?;
        Ok(Some(outcome))
    }

    // ========================================================================
    // Identity sequencing
    // ========================================================================

    /// Returns the lowest free identifier for a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    pub fn next_available_id(&mut self, table: Table) -> Result<i64, PersistenceError> {
        sequencer::next_available_id(&mut self.conn, table)
    }

    /// Renumbers a table to a contiguous `[1..count]` identifier range.
    ///
    /// Refused while dependent tables still reference the target table.
    ///
    /// # Errors
    ///
    /// Returns an error if dependent references exist or the transaction
    /// fails.
    pub fn resequence_ids(&mut self, table: Table) -> Result<(), PersistenceError> {
        sequencer::resequence_ids(&mut self.conn, table)
    }

    // ========================================================================
    // Campaign settings
    // ========================================================================

    /// Fetches the active campaign settings, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_campaign_settings(
        &mut self,
    ) -> Result<Option<CampaignSettings>, PersistenceError> {
        queries::campaign::get_campaign_settings(&mut self.conn)
    }

    /// Saves campaign settings, upserting on the campaign year.
    ///
    /// Concurrent saves are last-write-wins; the persisted settings are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn save_campaign_settings(
        &mut self,
        settings: &CampaignSettings,
    ) -> Result<CampaignSettings, PersistenceError> {
        mutations::campaign::save_campaign_settings(&mut self.conn, settings)?;
        queries::campaign::get_campaign_for_year(&mut self.conn, settings.year)?.ok_or_else(|| {
            PersistenceError::NotFound(format!(
                "Campaign settings for year {} vanished after save",
                settings.year
            ))
        })
    }

    /// Validates a candidate date against the active campaign window.
    ///
    /// Fails closed: no active campaign means every date is rejected.
    ///
    /// # Errors
    ///
    /// Returns a domain violation when the date is outside the window or
    /// no campaign is configured.
    pub fn validate_report_date(&mut self, candidate: Date) -> Result<(), PersistenceError> {
        let campaign = queries::campaign::get_campaign_settings(&mut self.conn)?;
        validate_campaign_date(campaign.as_ref(), candidate)?;
        Ok(())
    }

    // ========================================================================
    // Hunters
    // ========================================================================

    /// Registers a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if validation or the insert fails.
    pub fn create_hunter(
        &mut self,
        identity_number: &str,
        name: &str,
        category: HunterCategory,
        region: &str,
        is_minor: bool,
    ) -> Result<Hunter, PersistenceError> {
        mutations::hunters::create_hunter(
            &mut self.conn,
            identity_number,
            name,
            category,
            region,
            is_minor,
        )
    }

    /// Fetches a hunter by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_hunter(&mut self, hunter_id: i64) -> Result<Option<Hunter>, PersistenceError> {
        queries::hunters::get_hunter(&mut self.conn, hunter_id)
    }

    /// Fetches a hunter by identity number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_hunter_by_identity_number(
        &mut self,
        identity_number: &str,
    ) -> Result<Option<Hunter>, PersistenceError> {
        queries::hunters::get_hunter_by_identity_number(&mut self.conn, identity_number)
    }

    /// Lists every hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hunters(&mut self) -> Result<Vec<Hunter>, PersistenceError> {
        queries::hunters::list_hunters(&mut self.conn)
    }

    /// Applies a partial update to a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the hunter does not exist or validation fails.
    pub fn update_hunter(
        &mut self,
        hunter_id: i64,
        patch: &HunterPatch,
    ) -> Result<Hunter, PersistenceError> {
        mutations::hunters::update_hunter(&mut self.conn, hunter_id, patch)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user account with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, hashing, or the insert fails, or
    /// if a referenced hunter or guide does not exist.
    pub fn create_user(
        &mut self,
        login_name: &str,
        password: &str,
        role: UserRole,
        hunter_id: Option<i64>,
        guide_id: Option<i64>,
    ) -> Result<User, PersistenceError> {
        if let Some(hunter_id) = hunter_id
            && !queries::hunters::hunter_exists(&mut self.conn, hunter_id)?
        {
            return Err(PersistenceError::NotFound(format!(
                "Hunter not found: {hunter_id}"
            )));
        }
        if let Some(guide_id) = guide_id
            && !queries::guides::guide_exists(&mut self.conn, guide_id)?
        {
            return Err(PersistenceError::NotFound(format!(
                "Hunting guide not found: {guide_id}"
            )));
        }
        mutations::users::create_user(&mut self.conn, login_name, password, role, hunter_id, guide_id)
    }

    /// Fetches a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Fetches a user by login name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_login(
        &mut self,
        login_name: &str,
    ) -> Result<Option<User>, PersistenceError> {
        Ok(queries::users::get_account_by_login(&mut self.conn, login_name)?
            .map(|account| account.user))
    }

    /// Lists every user account referencing a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users_for_hunter(
        &mut self,
        hunter_id: i64,
    ) -> Result<Vec<User>, PersistenceError> {
        queries::users::list_users_for_hunter(&mut self.conn, hunter_id)
    }

    /// Applies a partial update to a user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or validation fails.
    pub fn update_user(
        &mut self,
        user_id: i64,
        patch: &UserPatch,
    ) -> Result<User, PersistenceError> {
        mutations::users::update_user(&mut self.conn, user_id, patch)
    }

    /// Replaces a user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or hashing fails.
    pub fn update_password(
        &mut self,
        user_id: i64,
        new_password: &str,
    ) -> Result<(), PersistenceError> {
        mutations::users::update_password(&mut self.conn, user_id, new_password)
    }

    /// Suspends a single user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn suspend_user(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::suspend_user(&mut self.conn, user_id)
    }

    /// Lifts the suspension on a single user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn reactivate_user(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::reactivate_user(&mut self.conn, user_id)
    }

    /// Verifies a password against a stored account.
    ///
    /// Unknown logins and suspended accounts never verify.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or hash comparison fails.
    pub fn verify_password(
        &mut self,
        login_name: &str,
        password: &str,
    ) -> Result<bool, PersistenceError> {
        queries::users::verify_password(&mut self.conn, login_name, password)
    }

    // ========================================================================
    // Permits & taxes
    // ========================================================================

    /// Issues a permit for a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the hunter does not exist or validation
    /// fails.
    pub fn create_permit(
        &mut self,
        hunter_id: i64,
        price_cents: i64,
        issue_date: Date,
        expiry_date: Date,
    ) -> Result<Permit, PersistenceError> {
        if !queries::hunters::hunter_exists(&mut self.conn, hunter_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Hunter not found: {hunter_id}"
            )));
        }
        mutations::permits::create_permit(&mut self.conn, hunter_id, price_cents, issue_date, expiry_date)
    }

    /// Fetches a permit by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_permit(&mut self, permit_id: i64) -> Result<Option<Permit>, PersistenceError> {
        queries::permits::get_permit(&mut self.conn, permit_id)
    }

    /// Lists every permit owned by a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_permits_for_hunter(
        &mut self,
        hunter_id: i64,
    ) -> Result<Vec<Permit>, PersistenceError> {
        queries::permits::list_permits_for_hunter(&mut self.conn, hunter_id)
    }

    /// Applies a partial update to a permit.
    ///
    /// # Errors
    ///
    /// Returns an error if the permit does not exist or validation
    /// fails.
    pub fn update_permit(
        &mut self,
        permit_id: i64,
        patch: &PermitPatch,
    ) -> Result<Permit, PersistenceError> {
        mutations::permits::update_permit(&mut self.conn, permit_id, patch)
    }

    /// Renews a permit: new expiry date, status back to active.
    ///
    /// # Errors
    ///
    /// Returns an error if the permit does not exist or the new expiry
    /// is invalid.
    pub fn renew_permit(
        &mut self,
        permit_id: i64,
        new_expiry_date: Date,
    ) -> Result<Permit, PersistenceError> {
        mutations::permits::renew_permit(&mut self.conn, permit_id, new_expiry_date)
    }

    /// Creates a tax record for a hunter, optionally tied to a permit.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced record does not exist or
    /// validation fails.
    pub fn create_tax(
        &mut self,
        hunter_id: i64,
        permit_id: Option<i64>,
        amount_cents: i64,
    ) -> Result<Tax, PersistenceError> {
        if !queries::hunters::hunter_exists(&mut self.conn, hunter_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Hunter not found: {hunter_id}"
            )));
        }
        if let Some(permit_id) = permit_id
            && !queries::permits::permit_exists(&mut self.conn, permit_id)?
        {
            return Err(PersistenceError::NotFound(format!(
                "Permit not found: {permit_id}"
            )));
        }
        mutations::taxes::create_tax(&mut self.conn, hunter_id, permit_id, amount_cents)
    }

    /// Fetches a tax record by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_tax(&mut self, tax_id: i64) -> Result<Option<Tax>, PersistenceError> {
        queries::permits::get_tax(&mut self.conn, tax_id)
    }

    /// Lists every tax owed by a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_taxes_for_hunter(
        &mut self,
        hunter_id: i64,
    ) -> Result<Vec<Tax>, PersistenceError> {
        queries::hunters::list_taxes_for_hunter(&mut self.conn, hunter_id)
    }

    /// Marks a tax as paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the tax does not exist.
    pub fn mark_tax_paid(&mut self, tax_id: i64, paid_on: Date) -> Result<(), PersistenceError> {
        mutations::taxes::mark_tax_paid(&mut self.conn, tax_id, paid_on)
    }

    /// Deletes a single tax record, lifting any permit-delete block it
    /// caused.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_tax(&mut self, tax_id: i64) -> Result<bool, PersistenceError> {
        mutations::taxes::delete_tax(&mut self.conn, tax_id)
    }

    // ========================================================================
    // Guides
    // ========================================================================

    /// Registers a hunting guide.
    ///
    /// # Errors
    ///
    /// Returns an error if validation or the insert fails.
    pub fn create_hunting_guide(
        &mut self,
        identity_number: &str,
        name: &str,
    ) -> Result<HuntingGuide, PersistenceError> {
        mutations::guides::create_guide(&mut self.conn, identity_number, name)
    }

    /// Fetches a guide by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_hunting_guide(
        &mut self,
        guide_id: i64,
    ) -> Result<Option<HuntingGuide>, PersistenceError> {
        queries::guides::get_guide(&mut self.conn, guide_id)
    }

    /// Lists every hunting guide.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hunting_guides(&mut self) -> Result<Vec<HuntingGuide>, PersistenceError> {
        queries::guides::list_guides(&mut self.conn)
    }

    /// Applies a partial update to a guide.
    ///
    /// # Errors
    ///
    /// Returns an error if the guide does not exist or validation fails.
    pub fn update_hunting_guide(
        &mut self,
        guide_id: i64,
        patch: &GuidePatch,
    ) -> Result<HuntingGuide, PersistenceError> {
        mutations::guides::update_guide(&mut self.conn, guide_id, patch)
    }

    /// Associates a hunter with a guide (idempotent).
    ///
    /// # Errors
    ///
    /// Returns an error if either record does not exist.
    pub fn link_guide_hunter(
        &mut self,
        guide_id: i64,
        hunter_id: i64,
    ) -> Result<(), PersistenceError> {
        if !queries::guides::guide_exists(&mut self.conn, guide_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Hunting guide not found: {guide_id}"
            )));
        }
        if !queries::hunters::hunter_exists(&mut self.conn, hunter_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Hunter not found: {hunter_id}"
            )));
        }
        mutations::guides::link_hunter(&mut self.conn, guide_id, hunter_id)
    }

    /// Removes the association between a hunter and a guide.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn unlink_guide_hunter(
        &mut self,
        guide_id: i64,
        hunter_id: i64,
    ) -> Result<bool, PersistenceError> {
        mutations::guides::unlink_hunter(&mut self.conn, guide_id, hunter_id)
    }

    /// Lists the hunters associated with a guide.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hunters_of_guide(
        &mut self,
        guide_id: i64,
    ) -> Result<Vec<i64>, PersistenceError> {
        queries::guides::list_hunter_ids_of_guide(&mut self.conn, guide_id)
    }

    // ========================================================================
    // Permit requests & hunting reports
    // ========================================================================

    /// Files a permit request for a hunter on behalf of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the hunter or user does not exist.
    pub fn create_permit_request(
        &mut self,
        hunter_id: i64,
        requested_by: i64,
    ) -> Result<PermitRequest, PersistenceError> {
        if !queries::hunters::hunter_exists(&mut self.conn, hunter_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Hunter not found: {hunter_id}"
            )));
        }
        if !queries::users::user_exists(&mut self.conn, requested_by)? {
            return Err(PersistenceError::NotFound(format!(
                "User not found: {requested_by}"
            )));
        }
        mutations::reports::create_permit_request(&mut self.conn, hunter_id, requested_by)
    }

    /// Moves a permit request to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not exist.
    pub fn set_permit_request_status(
        &mut self,
        request_id: i64,
        status: RequestStatus,
    ) -> Result<(), PersistenceError> {
        mutations::reports::set_request_status(&mut self.conn, request_id, status)
    }

    /// Lists every permit request filed for a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_requests_for_hunter(
        &mut self,
        hunter_id: i64,
    ) -> Result<Vec<PermitRequest>, PersistenceError> {
        queries::hunters::list_requests_for_hunter(&mut self.conn, hunter_id)
    }

    /// Files a hunting report, rejecting report dates outside the active
    /// campaign window (fail closed when no campaign is configured).
    ///
    /// # Errors
    ///
    /// Returns an error if the hunter does not exist, the date is outside
    /// the campaign window, or the insert fails.
    pub fn create_hunting_report(
        &mut self,
        hunter_id: i64,
        report_date: Date,
        species: &str,
        quantity: i32,
    ) -> Result<HuntingReport, PersistenceError> {
        if !queries::hunters::hunter_exists(&mut self.conn, hunter_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Hunter not found: {hunter_id}"
            )));
        }
        mutations::reports::create_hunting_report(
            &mut self.conn,
            hunter_id,
            report_date,
            species,
            quantity,
        )
    }

    /// Lists every hunting report filed for a hunter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reports_for_hunter(
        &mut self,
        hunter_id: i64,
    ) -> Result<Vec<HuntingReport>, PersistenceError> {
        queries::hunters::list_reports_for_hunter(&mut self.conn, hunter_id)
    }
}
