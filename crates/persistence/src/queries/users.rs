// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User account reads and credential checks.

use bcrypt::verify;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{UserAccount, UserRow};
use crate::diesel_schema::users;
use crate::error::PersistenceError;
use chasse_domain::User;

/// Fetches a user by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<User>, PersistenceError> {
    let row = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?;

    row.map(UserRow::into_domain).transpose()
}

/// Fetches a user account (including the password hash) by login name.
///
/// Login names are stored uppercase; lookup is case-insensitive.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_account_by_login(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<Option<UserAccount>, PersistenceError> {
    let login_name = login_name.to_uppercase();
    let row = users::table
        .filter(users::login_name.eq(&login_name))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?;

    row.map(UserRow::into_account).transpose()
}

/// Lists every user account referencing a hunter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_users_for_hunter(
    conn: &mut SqliteConnection,
    hunter_id: i64,
) -> Result<Vec<User>, PersistenceError> {
    let rows = users::table
        .filter(users::hunter_id.eq(hunter_id))
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load::<UserRow>(conn)?;

    rows.into_iter().map(UserRow::into_domain).collect()
}

/// Returns whether a user row exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn user_exists(conn: &mut SqliteConnection, user_id: i64) -> Result<bool, PersistenceError> {
    let count: i64 = users::table
        .filter(users::user_id.eq(user_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Verifies a password against a stored account.
///
/// Suspended accounts never verify, regardless of the password.
///
/// # Errors
///
/// Returns an error if the lookup or hash comparison fails.
pub fn verify_password(
    conn: &mut SqliteConnection,
    login_name: &str,
    password: &str,
) -> Result<bool, PersistenceError> {
    let Some(account) = get_account_by_login(conn, login_name)? else {
        debug!("Credential check for unknown login");
        return Ok(false);
    };

    if account.user.is_suspended {
        debug!("Credential check for suspended user {}", account.user.id);
        return Ok(false);
    }

    verify(password, &account.password_hash)
        .map_err(|e| PersistenceError::Other(format!("Password verification failed: {e}")))
}
