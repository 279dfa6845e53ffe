// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User account creates and updates.
//!
//! Login names are stored uppercase; passwords are stored as bcrypt
//! hashes and never leave this layer in clear text.

use bcrypt::{DEFAULT_COST, hash};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::sequencer::{self, Table};
use chasse_domain::{User, UserPatch, UserRole, validate_login_name};

/// Creates a user account, assigning the lowest free identifier.
///
/// `hunter_id` and `guide_id` link the account to an existing hunter or
/// guide record; both are optional and the caller verifies they exist.
///
/// # Errors
///
/// Returns an error if validation, hashing, or the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    login_name: &str,
    password: &str,
    role: UserRole,
    hunter_id: Option<i64>,
    guide_id: Option<i64>,
) -> Result<User, PersistenceError> {
    validate_login_name(login_name)?;
    let login_name = login_name.to_uppercase();

    let password_hash = hash(password, DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Password hashing failed: {e}")))?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let user_id = sequencer::next_available_id(conn, Table::Users)?;

        diesel::insert_into(users::table)
            .values((
                users::user_id.eq(user_id),
                users::login_name.eq(&login_name),
                users::password_hash.eq(&password_hash),
                users::role.eq(role.as_str()),
                users::hunter_id.eq(hunter_id),
                users::guide_id.eq(guide_id),
                users::is_suspended.eq(0),
            ))
            .execute(conn)?;

        info!("Created user {} ({})", user_id, login_name);
        Ok(User {
            id: user_id,
            login_name,
            role,
            hunter_id,
            guide_id,
            is_suspended: false,
        })
    })
}

/// Applies a partial update to a user account.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the user does not exist.
pub fn update_user(
    conn: &mut SqliteConnection,
    user_id: i64,
    patch: &UserPatch,
) -> Result<User, PersistenceError> {
    patch.validate()?;

    let updated = match patch.role {
        Some(role) => diesel::update(users::table.filter(users::user_id.eq(user_id)))
            .set(users::role.eq(role.as_str()))
            .execute(conn)?,
        None => 0,
    };

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User not found: {user_id}"
        )));
    }

    info!("Updated user {}", user_id);
    crate::queries::users::get_user(conn, user_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("User not found: {user_id}")))
}

/// Replaces a user's password with a fresh bcrypt hash.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the user does not exist.
pub fn update_password(
    conn: &mut SqliteConnection,
    user_id: i64,
    new_password: &str,
) -> Result<(), PersistenceError> {
    let password_hash = hash(new_password, DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Password hashing failed: {e}")))?;

    let updated = diesel::update(users::table.filter(users::user_id.eq(user_id)))
        .set(users::password_hash.eq(&password_hash))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User not found: {user_id}"
        )));
    }

    info!("Updated password for user {}", user_id);
    Ok(())
}

/// Suspends a single user account.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the user does not exist.
pub fn suspend_user(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    set_suspension(conn, user_id, true)
}

/// Lifts the suspension on a single user account.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the user does not exist.
pub fn reactivate_user(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    set_suspension(conn, user_id, false)
}

fn set_suspension(
    conn: &mut SqliteConnection,
    user_id: i64,
    suspended: bool,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(users::table.filter(users::user_id.eq(user_id)))
        .set(users::is_suspended.eq(i32::from(suspended)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User not found: {user_id}"
        )));
    }

    info!(
        "{} user {}",
        if suspended { "Suspended" } else { "Reactivated" },
        user_id
    );
    Ok(())
}
