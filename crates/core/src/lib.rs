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

mod command;
mod error;
mod outcome;
mod plan;
mod resolve;

pub use command::{CascadeFacts, LifecycleCommand, RootEntity};
pub use error::CoreError;
pub use outcome::{BatchOutcome, CascadeOutcome, StepOutcome};
pub use plan::{CascadePlan, MutationStep};
pub use resolve::resolve;
