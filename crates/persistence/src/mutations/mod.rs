// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side database operations.
//!
//! Every multi-row state change goes through `lifecycle`; the other
//! modules hold single-entity creates and updates.

pub mod campaign;
pub mod guides;
pub mod hunters;
pub mod lifecycle;
pub mod permits;
pub mod reports;
pub mod taxes;
pub mod users;
