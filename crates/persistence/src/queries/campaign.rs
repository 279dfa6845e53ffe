// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Campaign settings reads.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::CampaignRow;
use crate::diesel_schema::hunting_campaigns;
use crate::error::PersistenceError;
use chasse_domain::CampaignSettings;

/// Fetches the active campaign settings, if a campaign is configured.
///
/// At most one campaign row is active at a time; the upsert path
/// maintains that invariant.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_campaign_settings(
    conn: &mut SqliteConnection,
) -> Result<Option<CampaignSettings>, PersistenceError> {
    let row = hunting_campaigns::table
        .filter(hunting_campaigns::is_active.eq(1))
        .order(hunting_campaigns::year.desc())
        .select(CampaignRow::as_select())
        .first::<CampaignRow>(conn)
        .optional()?;

    row.map(CampaignRow::into_domain).transpose()
}

/// Fetches the campaign settings for a specific year, active or not.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_campaign_for_year(
    conn: &mut SqliteConnection,
    year: u16,
) -> Result<Option<CampaignSettings>, PersistenceError> {
    let row = hunting_campaigns::table
        .filter(hunting_campaigns::year.eq(i32::from(year)))
        .select(CampaignRow::as_select())
        .first::<CampaignRow>(conn)
        .optional()?;

    row.map(CampaignRow::into_domain).transpose()
}
