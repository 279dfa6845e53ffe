// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cascade resolution.
//!
//! `resolve` is a pure function from a lifecycle command and a snapshot
//! of facts to an ordered cascade plan. It never touches the store:
//! preconditions are evaluated against the facts the caller gathered,
//! and a blocked command yields an error with no steps rather than a
//! partial plan.

use crate::command::{CascadeFacts, LifecycleCommand};
use crate::error::CoreError;
use crate::plan::{CascadePlan, MutationStep};

/// Resolves a lifecycle command into an ordered cascade plan.
///
/// Step ordering is always child-before-parent: dependent records are
/// detached or deleted first, and the root-entity mutation is the final
/// step.
///
/// # Arguments
///
/// * `command` - The lifecycle command to resolve
/// * `facts` - Read-only facts about the root entity, gathered by the
///   caller
///
/// # Errors
///
/// * [`CoreError::RootNotFound`] if the root entity does not exist
/// * [`CoreError::ActivePermitsBlockDeletion`] for an unforced hunter
///   delete while active permits exist
/// * [`CoreError::TaxesBlockPermitDeletion`] for a permit delete while
///   tax records reference the permit
pub fn resolve(command: LifecycleCommand, facts: &CascadeFacts) -> Result<CascadePlan, CoreError> {
    if !facts.root_exists {
        return Err(CoreError::RootNotFound {
            entity: command.root_entity(),
            id: command.root_id(),
        });
    }

    let steps = match command {
        LifecycleCommand::DeleteHunter { hunter_id, force } => {
            if facts.active_permit_count > 0 && !force {
                return Err(CoreError::ActivePermitsBlockDeletion {
                    hunter_id,
                    active_permit_count: facts.active_permit_count,
                });
            }
            vec![
                MutationStep::SuspendActivePermits { hunter_id },
                MutationStep::DetachUsersFromHunter { hunter_id },
                MutationStep::DeleteTaxesForHunter { hunter_id },
                MutationStep::DeletePermitRequestsForHunter { hunter_id },
                MutationStep::DeleteReportsForHunter { hunter_id },
                MutationStep::DeleteHunter { hunter_id },
            ]
        }
        LifecycleCommand::SuspendHunter { hunter_id } => vec![
            MutationStep::SuspendActivePermits { hunter_id },
            MutationStep::SuspendUsersOfHunter { hunter_id },
            MutationStep::MarkHunterInactive { hunter_id },
        ],
        // The inverse of suspension, except permits: reactivating a
        // hunter must not silently re-validate potentially-expired
        // permits. Renewal is a separate explicit operation.
        LifecycleCommand::ReactivateHunter { hunter_id } => vec![
            MutationStep::ReactivateUsersOfHunter { hunter_id },
            MutationStep::MarkHunterActive { hunter_id },
        ],
        LifecycleCommand::DeleteUser { user_id } => vec![
            MutationStep::ClearHunterReference { user_id },
            MutationStep::DeletePermitRequestsByUser { user_id },
            MutationStep::DeleteUser { user_id },
        ],
        LifecycleCommand::DeleteGuide { guide_id } => vec![
            MutationStep::DeleteUsersOfGuide { guide_id },
            MutationStep::DeleteGuideLinks { guide_id },
            MutationStep::DeleteGuide { guide_id },
        ],
        LifecycleCommand::DeletePermit { permit_id } => {
            if facts.tax_count > 0 {
                return Err(CoreError::TaxesBlockPermitDeletion {
                    permit_id,
                    tax_count: facts.tax_count,
                });
            }
            vec![MutationStep::DeletePermit { permit_id }]
        }
    };

    Ok(CascadePlan::new(command, steps))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::command::RootEntity;

    #[test]
    fn test_unforced_hunter_delete_with_active_permits_is_blocked() {
        let command = LifecycleCommand::DeleteHunter {
            hunter_id: 7,
            force: false,
        };
        let facts = CascadeFacts::for_hunter(true, 2);

        let err = resolve(command, &facts).unwrap_err();
        assert_eq!(
            err,
            CoreError::ActivePermitsBlockDeletion {
                hunter_id: 7,
                active_permit_count: 2,
            }
        );
        assert!(err.is_precondition_failure());
    }

    #[test]
    fn test_forced_hunter_delete_resolves_full_cascade() {
        let command = LifecycleCommand::DeleteHunter {
            hunter_id: 7,
            force: true,
        };
        let facts = CascadeFacts::for_hunter(true, 2);

        let plan = resolve(command, &facts).unwrap();
        assert_eq!(plan.steps().len(), 6);
        assert_eq!(
            plan.root_step(),
            Some(&MutationStep::DeleteHunter { hunter_id: 7 })
        );
    }

    #[test]
    fn test_hunter_delete_without_permits_needs_no_force() {
        let command = LifecycleCommand::DeleteHunter {
            hunter_id: 7,
            force: false,
        };
        let facts = CascadeFacts::for_hunter(true, 0);
        assert!(resolve(command, &facts).is_ok());
    }

    #[test]
    fn test_root_mutation_is_always_last() {
        let commands = [
            LifecycleCommand::DeleteHunter {
                hunter_id: 1,
                force: true,
            },
            LifecycleCommand::SuspendHunter { hunter_id: 1 },
            LifecycleCommand::ReactivateHunter { hunter_id: 1 },
            LifecycleCommand::DeleteUser { user_id: 1 },
            LifecycleCommand::DeleteGuide { guide_id: 1 },
            LifecycleCommand::DeletePermit { permit_id: 1 },
        ];

        for command in commands {
            let plan = resolve(command, &CascadeFacts::for_root(true)).unwrap();
            let root_index = plan.steps().len() - 1;
            assert!(plan.is_root_step(root_index), "command: {command:?}");
            let root_matches = matches!(
                plan.root_step().unwrap(),
                MutationStep::DeleteHunter { .. }
                    | MutationStep::MarkHunterInactive { .. }
                    | MutationStep::MarkHunterActive { .. }
                    | MutationStep::DeleteUser { .. }
                    | MutationStep::DeleteGuide { .. }
                    | MutationStep::DeletePermit { .. }
            );
            assert!(root_matches, "command: {command:?}");
        }
    }

    #[test]
    fn test_reactivation_never_touches_permits() {
        let plan = resolve(
            LifecycleCommand::ReactivateHunter { hunter_id: 3 },
            &CascadeFacts::for_hunter(true, 0),
        )
        .unwrap();

        for step in plan.steps() {
            assert!(!matches!(
                step,
                MutationStep::SuspendActivePermits { .. }
            ));
        }
    }

    #[test]
    fn test_permit_delete_with_taxes_is_always_rejected() {
        let command = LifecycleCommand::DeletePermit { permit_id: 12 };
        let facts = CascadeFacts::for_permit(true, 1);

        let err = resolve(command, &facts).unwrap_err();
        assert_eq!(
            err,
            CoreError::TaxesBlockPermitDeletion {
                permit_id: 12,
                tax_count: 1,
            }
        );
    }

    #[test]
    fn test_tax_free_permit_delete_is_a_single_step() {
        let plan = resolve(
            LifecycleCommand::DeletePermit { permit_id: 12 },
            &CascadeFacts::for_permit(true, 0),
        )
        .unwrap();
        assert_eq!(
            plan.steps(),
            &[MutationStep::DeletePermit { permit_id: 12 }]
        );
    }

    #[test]
    fn test_missing_root_is_reported_not_planned() {
        let err = resolve(
            LifecycleCommand::DeleteUser { user_id: 99 },
            &CascadeFacts::for_root(false),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::RootNotFound {
                entity: RootEntity::User,
                id: 99,
            }
        );
        assert!(!err.is_precondition_failure());
    }

    #[test]
    fn test_user_delete_detaches_before_removal() {
        let plan = resolve(
            LifecycleCommand::DeleteUser { user_id: 4 },
            &CascadeFacts::for_root(true),
        )
        .unwrap();

        let detach = plan
            .steps()
            .iter()
            .position(|s| matches!(s, MutationStep::ClearHunterReference { .. }))
            .unwrap();
        let delete = plan
            .steps()
            .iter()
            .position(|s| matches!(s, MutationStep::DeleteUser { .. }))
            .unwrap();
        assert!(detach < delete);
    }
}
