// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Execution outcomes.
//!
//! The orchestrator records one outcome per step instead of logging and
//! moving on, so callers and tests can assert on exactly what happened
//! during a cascade.

use crate::plan::MutationStep;

/// Result of executing a single cascade step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step ran; `rows_affected` rows were touched (zero is a valid
    /// no-op for idempotent set-level steps).
    Applied {
        /// The number of rows the step touched.
        rows_affected: usize,
    },
    /// A non-critical step failed and was skipped.
    Skipped {
        /// Why the step was skipped.
        reason: String,
    },
}

impl StepOutcome {
    /// Returns whether the step was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Aggregated outcome of one cascade execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeOutcome {
    steps: Vec<(MutationStep, StepOutcome)>,
}

impl CascadeOutcome {
    /// Records the outcome of one step.
    pub fn record(&mut self, step: MutationStep, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    /// Returns every recorded step with its outcome, in execution order.
    #[must_use]
    pub fn steps(&self) -> &[(MutationStep, StepOutcome)] {
        &self.steps
    }

    /// Returns the number of applied steps.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.steps.iter().filter(|(_, o)| o.is_applied()).count()
    }

    /// Returns the number of skipped steps.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.steps.len() - self.applied_count()
    }

    /// Returns whether every step was applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_count() == 0
    }
}

/// Success/failure counts for a batch operation (e.g. delete all
/// guides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    /// Number of root entities whose cascade completed.
    pub successful: usize,
    /// Number of root entities whose cascade failed.
    pub failed: usize,
}

impl BatchOutcome {
    /// Returns the total number of root entities attempted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.successful + self.failed
    }
}
