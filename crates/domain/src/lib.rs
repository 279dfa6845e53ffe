// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod campaign;
mod error;
mod patch;
mod types;
mod validation;

pub use campaign::{CampaignSettings, validate_campaign_date};
pub use error::DomainError;
pub use patch::{GuidePatch, HunterPatch, PermitPatch, UserPatch};
pub use types::{
    EffectivePermitStatus, Hunter, HunterCategory, HuntingGuide, HuntingReport, Permit,
    PermitRequest, PermitStatus, RequestStatus, Tax, User, UserRole,
};
pub use validation::{
    validate_amount_cents, validate_identity_number, validate_login_name, validate_name,
    validate_permit_dates, validate_region,
};
