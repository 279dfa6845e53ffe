// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::RootEntity;
use chasse_domain::DomainError;

/// Errors that can occur while resolving a lifecycle command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The targeted root entity does not exist (already deleted or a
    /// double-submit). Callers report this as a no-op failure, never a
    /// crash.
    RootNotFound {
        /// The kind of entity targeted.
        entity: RootEntity,
        /// The identifier that was not found.
        id: i64,
    },
    /// A hunter cannot be hard-deleted while it owns active permits,
    /// unless the caller forces the deletion.
    ActivePermitsBlockDeletion {
        /// The hunter targeted for deletion.
        hunter_id: i64,
        /// The number of active permits blocking the delete.
        active_permit_count: usize,
    },
    /// A permit cannot be deleted while tax records reference it,
    /// regardless of force flags elsewhere.
    TaxesBlockPermitDeletion {
        /// The permit targeted for deletion.
        permit_id: i64,
        /// The number of taxes blocking the delete.
        tax_count: usize,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl CoreError {
    /// Returns whether this error is a hard business-rule precondition
    /// failure (as opposed to a missing root entity).
    #[must_use]
    pub const fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::ActivePermitsBlockDeletion { .. } | Self::TaxesBlockPermitDeletion { .. }
        )
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootNotFound { entity, id } => {
                write!(f, "{entity} {id} not found")
            }
            Self::ActivePermitsBlockDeletion {
                hunter_id,
                active_permit_count,
            } => write!(
                f,
                "Hunter {hunter_id} cannot be deleted: {active_permit_count} active permit(s); use force to override"
            ),
            Self::TaxesBlockPermitDeletion {
                permit_id,
                tax_count,
            } => write!(
                f,
                "Permit {permit_id} cannot be deleted: {tax_count} tax record(s) reference it"
            ),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
