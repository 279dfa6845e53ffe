// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The kind of entity directly targeted by a lifecycle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootEntity {
    /// A hunter record.
    Hunter,
    /// A user account.
    User,
    /// A hunting guide record.
    Guide,
    /// A permit record.
    Permit,
}

impl std::fmt::Display for RootEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hunter => "hunter",
            Self::User => "user",
            Self::Guide => "guide",
            Self::Permit => "permit",
        };
        write!(f, "{name}")
    }
}

/// A lifecycle command represents intent as data only.
///
/// Commands are the only way to request a cascading state change. The
/// resolver turns a command into an ordered [`CascadePlan`] without
/// executing anything.
///
/// [`CascadePlan`]: crate::CascadePlan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    /// Hard-delete a hunter and its dependent records.
    DeleteHunter {
        /// The hunter to delete.
        hunter_id: i64,
        /// Bypass the active-permit precondition.
        force: bool,
    },
    /// Suspend a hunter (reversible).
    SuspendHunter {
        /// The hunter to suspend.
        hunter_id: i64,
    },
    /// Reactivate a previously suspended hunter.
    ///
    /// Permits are deliberately not reactivated; renewing a permit is a
    /// separate, explicit operation.
    ReactivateHunter {
        /// The hunter to reactivate.
        hunter_id: i64,
    },
    /// Hard-delete a user account, detaching (not deleting) any
    /// referenced hunter.
    DeleteUser {
        /// The user to delete.
        user_id: i64,
    },
    /// Hard-delete a hunting guide, its linked user account, and its
    /// guide-hunter associations.
    DeleteGuide {
        /// The guide to delete.
        guide_id: i64,
    },
    /// Hard-delete a permit. Rejected while any tax references it.
    DeletePermit {
        /// The permit to delete.
        permit_id: i64,
    },
}

impl LifecycleCommand {
    /// Returns the kind of entity this command targets.
    #[must_use]
    pub const fn root_entity(&self) -> RootEntity {
        match self {
            Self::DeleteHunter { .. } | Self::SuspendHunter { .. } | Self::ReactivateHunter { .. } => {
                RootEntity::Hunter
            }
            Self::DeleteUser { .. } => RootEntity::User,
            Self::DeleteGuide { .. } => RootEntity::Guide,
            Self::DeletePermit { .. } => RootEntity::Permit,
        }
    }

    /// Returns the identifier of the targeted root entity.
    #[must_use]
    pub const fn root_id(&self) -> i64 {
        match self {
            Self::DeleteHunter { hunter_id, .. }
            | Self::SuspendHunter { hunter_id }
            | Self::ReactivateHunter { hunter_id } => *hunter_id,
            Self::DeleteUser { user_id } => *user_id,
            Self::DeleteGuide { guide_id } => *guide_id,
            Self::DeletePermit { permit_id } => *permit_id,
        }
    }
}

/// Read-only facts about the root entity, gathered by the caller before
/// resolution.
///
/// The resolver itself never touches the store; callers snapshot the
/// counts the preconditions depend on and pass them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeFacts {
    /// Whether the root entity exists.
    pub root_exists: bool,
    /// Number of active permits owned by the root hunter (hunter
    /// commands only).
    pub active_permit_count: usize,
    /// Number of taxes referencing the root permit (permit commands
    /// only).
    pub tax_count: usize,
}

impl CascadeFacts {
    /// Facts for a hunter-rooted command.
    #[must_use]
    pub const fn for_hunter(root_exists: bool, active_permit_count: usize) -> Self {
        Self {
            root_exists,
            active_permit_count,
            tax_count: 0,
        }
    }

    /// Facts for a permit-rooted command.
    #[must_use]
    pub const fn for_permit(root_exists: bool, tax_count: usize) -> Self {
        Self {
            root_exists,
            active_permit_count: 0,
            tax_count,
        }
    }

    /// Facts for a user- or guide-rooted command, which have no
    /// count-based preconditions.
    #[must_use]
    pub const fn for_root(root_exists: bool) -> Self {
        Self {
            root_exists,
            active_permit_count: 0,
            tax_count: 0,
        }
    }
}
