// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Campaign settings upserts.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::data_models::format_date;
use crate::diesel_schema::hunting_campaigns;
use crate::error::PersistenceError;
use chasse_domain::CampaignSettings;

/// Saves campaign settings, upserting on the campaign year.
///
/// Concurrent saves are last-write-wins. When the saved campaign is
/// active, every other campaign row is deactivated in the same
/// transaction so at most one campaign is ever active.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn save_campaign_settings(
    conn: &mut SqliteConnection,
    settings: &CampaignSettings,
) -> Result<(), PersistenceError> {
    let start_text = format_date(settings.start_date)?;
    let end_text = format_date(settings.end_date)?;
    let year = i32::from(settings.year);
    let is_active = i32::from(settings.is_active);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if settings.is_active {
            diesel::update(hunting_campaigns::table.filter(hunting_campaigns::year.ne(year)))
                .set(hunting_campaigns::is_active.eq(0))
                .execute(conn)?;
        }

        let updated =
            diesel::update(hunting_campaigns::table.filter(hunting_campaigns::year.eq(year)))
                .set((
                    hunting_campaigns::start_date.eq(&start_text),
                    hunting_campaigns::end_date.eq(&end_text),
                    hunting_campaigns::is_active.eq(is_active),
                ))
                .execute(conn)?;

        if updated == 0 {
            diesel::insert_into(hunting_campaigns::table)
                .values((
                    hunting_campaigns::year.eq(year),
                    hunting_campaigns::start_date.eq(&start_text),
                    hunting_campaigns::end_date.eq(&end_text),
                    hunting_campaigns::is_active.eq(is_active),
                ))
                .execute(conn)?;
        }

        info!(
            "Saved campaign settings for year {} ({} to {}, active: {})",
            year,
            settings.start_date,
            settings.end_date,
            settings.is_active
        );
        Ok(())
    })
}
