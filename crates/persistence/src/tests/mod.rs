// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod campaign_tests;
mod cascade_tests;
mod lifecycle_tests;
mod sequencer_tests;

use time::{Date, Month};

use crate::Storage;
use chasse_domain::{CampaignSettings, Hunter, HunterCategory};

pub fn test_storage() -> Storage {
    Storage::new_in_memory().expect("In-memory database")
}

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).expect("Valid month"), day)
        .expect("Valid test date")
}

/// Registers a hunter with default fields; the identity number doubles
/// as the name suffix so rows stay distinguishable after resequencing.
pub fn add_hunter(storage: &mut Storage, identity_number: &str) -> Hunter {
    storage
        .create_hunter(
            identity_number,
            &format!("Hunter {identity_number}"),
            HunterCategory::Resident,
            "Province Nord",
            false,
        )
        .expect("Hunter created")
}

/// Configures the active 2025 campaign (January 4 to June 25).
pub fn add_campaign(storage: &mut Storage) -> CampaignSettings {
    let settings = CampaignSettings::new(2025, date(2025, 1, 4), date(2025, 6, 25), true)
        .expect("Valid campaign range");
    storage
        .save_campaign_settings(&settings)
        .expect("Campaign saved")
}
