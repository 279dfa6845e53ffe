// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cascade plans.
//!
//! A plan is an ordered list of mutation steps, child-before-parent:
//! dependents are detached or deleted first, the root entity mutation is
//! always last. That ordering keeps the "no dangling reference"
//! invariant true at every intermediate step even if execution stops
//! early. Only the final (root) step is critical; every other step is
//! best-effort.

use crate::command::LifecycleCommand;

/// A single mutation against the store.
///
/// Steps are set-level and idempotent: "suspend all active permits of
/// hunter 7" affects zero or more rows, and re-running it is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStep {
    /// Set every active permit owned by the hunter to suspended.
    /// Permits are retained; taxed permits are never hard-deleted.
    SuspendActivePermits {
        /// The owning hunter.
        hunter_id: i64,
    },
    /// Clear `hunter_id` on every user referencing the hunter.
    DetachUsersFromHunter {
        /// The referenced hunter.
        hunter_id: i64,
    },
    /// Delete every tax owed by the hunter.
    DeleteTaxesForHunter {
        /// The owning hunter.
        hunter_id: i64,
    },
    /// Delete every permit request filed for the hunter.
    DeletePermitRequestsForHunter {
        /// The subject hunter.
        hunter_id: i64,
    },
    /// Delete every hunting report filed for the hunter.
    DeleteReportsForHunter {
        /// The subject hunter.
        hunter_id: i64,
    },
    /// Delete the hunter row itself. Root step.
    DeleteHunter {
        /// The hunter to delete.
        hunter_id: i64,
    },
    /// Set `is_active = false` on the hunter row. Root step of a
    /// suspension.
    MarkHunterInactive {
        /// The hunter to suspend.
        hunter_id: i64,
    },
    /// Set `is_active = true` on the hunter row. Root step of a
    /// reactivation.
    MarkHunterActive {
        /// The hunter to reactivate.
        hunter_id: i64,
    },
    /// Suspend every user account referencing the hunter.
    SuspendUsersOfHunter {
        /// The referenced hunter.
        hunter_id: i64,
    },
    /// Lift the suspension on every user account referencing the hunter.
    ReactivateUsersOfHunter {
        /// The referenced hunter.
        hunter_id: i64,
    },
    /// Clear the user's own hunter reference (detach, never cascade).
    ClearHunterReference {
        /// The user being detached.
        user_id: i64,
    },
    /// Delete every permit request the user filed.
    DeletePermitRequestsByUser {
        /// The filing user.
        user_id: i64,
    },
    /// Delete the user row itself. Root step.
    DeleteUser {
        /// The user to delete.
        user_id: i64,
    },
    /// Delete the user account linked to the guide, if one exists.
    DeleteUsersOfGuide {
        /// The linked guide.
        guide_id: i64,
    },
    /// Delete every guide-hunter association of the guide.
    DeleteGuideLinks {
        /// The owning guide.
        guide_id: i64,
    },
    /// Delete the guide row itself. Root step.
    DeleteGuide {
        /// The guide to delete.
        guide_id: i64,
    },
    /// Delete the permit row itself. Root step.
    DeletePermit {
        /// The permit to delete.
        permit_id: i64,
    },
}

impl std::fmt::Display for MutationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuspendActivePermits { hunter_id } => {
                write!(f, "suspend active permits of hunter {hunter_id}")
            }
            Self::DetachUsersFromHunter { hunter_id } => {
                write!(f, "detach users from hunter {hunter_id}")
            }
            Self::DeleteTaxesForHunter { hunter_id } => {
                write!(f, "delete taxes of hunter {hunter_id}")
            }
            Self::DeletePermitRequestsForHunter { hunter_id } => {
                write!(f, "delete permit requests for hunter {hunter_id}")
            }
            Self::DeleteReportsForHunter { hunter_id } => {
                write!(f, "delete hunting reports for hunter {hunter_id}")
            }
            Self::DeleteHunter { hunter_id } => write!(f, "delete hunter {hunter_id}"),
            Self::MarkHunterInactive { hunter_id } => {
                write!(f, "mark hunter {hunter_id} inactive")
            }
            Self::MarkHunterActive { hunter_id } => write!(f, "mark hunter {hunter_id} active"),
            Self::SuspendUsersOfHunter { hunter_id } => {
                write!(f, "suspend users of hunter {hunter_id}")
            }
            Self::ReactivateUsersOfHunter { hunter_id } => {
                write!(f, "reactivate users of hunter {hunter_id}")
            }
            Self::ClearHunterReference { user_id } => {
                write!(f, "clear hunter reference of user {user_id}")
            }
            Self::DeletePermitRequestsByUser { user_id } => {
                write!(f, "delete permit requests filed by user {user_id}")
            }
            Self::DeleteUser { user_id } => write!(f, "delete user {user_id}"),
            Self::DeleteUsersOfGuide { guide_id } => {
                write!(f, "delete user account of guide {guide_id}")
            }
            Self::DeleteGuideLinks { guide_id } => {
                write!(f, "delete guide-hunter links of guide {guide_id}")
            }
            Self::DeleteGuide { guide_id } => write!(f, "delete guide {guide_id}"),
            Self::DeletePermit { permit_id } => write!(f, "delete permit {permit_id}"),
        }
    }
}

/// An ordered cascade plan produced by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePlan {
    command: LifecycleCommand,
    steps: Vec<MutationStep>,
}

impl CascadePlan {
    /// Creates a plan for a command.
    ///
    /// The step order is the execution order; the last step must be the
    /// root-entity mutation.
    #[must_use]
    pub const fn new(command: LifecycleCommand, steps: Vec<MutationStep>) -> Self {
        Self { command, steps }
    }

    /// Returns the command this plan resolves.
    #[must_use]
    pub const fn command(&self) -> LifecycleCommand {
        self.command
    }

    /// Returns the steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[MutationStep] {
        &self.steps
    }

    /// Returns the root-entity mutation (the final step).
    #[must_use]
    pub fn root_step(&self) -> Option<&MutationStep> {
        self.steps.last()
    }

    /// Returns whether the step at `index` is the critical root
    /// mutation.
    #[must_use]
    pub const fn is_root_step(&self, index: usize) -> bool {
        index + 1 == self.steps.len()
    }
}
