// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::selection::Selection;
use crate::types::{EntityId, EntityKind};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// How many selections an action accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArityRule {
    /// Exactly this many selections.
    Exactly(usize),
    /// This many selections or more.
    AtLeast(usize),
}

impl ArityRule {
    /// Checks a selection count against the rule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer entities are selected than the rule requires
    /// - More entities are selected than an `Exactly` rule allows
    pub const fn check(&self, kind: EntityKind, selected: usize) -> Result<(), DomainError> {
        match *self {
            Self::Exactly(required) | Self::AtLeast(required) if selected < required => {
                Err(DomainError::SelectionTooSmall {
                    kind,
                    required,
                    selected,
                })
            }
            Self::Exactly(allowed) if selected > allowed => Err(DomainError::SelectionTooLarge {
                kind,
                allowed,
                selected,
            }),
            _ => Ok(()),
        }
    }
}

/// The bulk actions a screen can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Replace the first selected entity with the second.
    Merge,
    /// Confirm every selected entity together.
    Confirm,
}

impl ActionKind {
    /// The arity rule this action enforces before any request is sent.
    #[must_use]
    pub const fn arity(&self) -> ArityRule {
        match self {
            Self::Merge => ArityRule::Exactly(2),
            Self::Confirm => ArityRule::AtLeast(1),
        }
    }

    /// Label for the trigger control.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Merge => "Merge Selected",
            Self::Confirm => "Submit Selected",
        }
    }

    /// Past-tense verb for status messages.
    #[must_use]
    pub const fn past_tense(&self) -> &'static str {
        match self {
            Self::Merge => "merged",
            Self::Confirm => "submitted",
        }
    }

    /// Bare verb for failure messages.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Confirm => "submit",
        }
    }
}

/// The payload for one bulk action, derived from a valid selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    /// Replace `old` with `new`.
    Pairwise {
        /// The kind of entity being merged.
        kind: EntityKind,
        /// The entity being replaced.
        old: EntityId,
        /// The entity that replaces it.
        new: EntityId,
    },
    /// Act on every id, in selection order.
    List {
        /// The kind of entity being confirmed.
        kind: EntityKind,
        /// The selected ids.
        ids: Vec<EntityId>,
    },
}

impl ActionRequest {
    /// Builds the payload for `action` from `selection`.
    ///
    /// Arity is validated first; nothing is built for an invalid selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection does not satisfy the action's arity rule.
    pub fn build(
        kind: EntityKind,
        action: ActionKind,
        selection: &Selection,
    ) -> Result<Self, DomainError> {
        action.arity().check(kind, selection.len())?;

        match (action, selection.primary(), selection.secondary()) {
            (ActionKind::Merge, Some(old), Some(new)) => Ok(Self::Pairwise { kind, old, new }),
            // Unreachable after the arity check, reported the same way.
            (ActionKind::Merge, _, _) => Err(DomainError::SelectionTooSmall {
                kind,
                required: 2,
                selected: selection.len(),
            }),
            (ActionKind::Confirm, _, _) => Ok(Self::List {
                kind,
                ids: selection.as_slice().to_vec(),
            }),
        }
    }

    /// The kind of entity the request targets.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Pairwise { kind, .. } | Self::List { kind, .. } => *kind,
        }
    }

    /// The ids the request carries, in the order they are sent.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        match self {
            Self::Pairwise { old, new, .. } => vec![*old, *new],
            Self::List { ids, .. } => ids.clone(),
        }
    }

    /// Number of entities the request touches.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Pairwise { .. } => 2,
            Self::List { ids, .. } => ids.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serialises to `{"old<Kind>Id": .., "new<Kind>Id": ..}` or `{"<kind>Ids": [..]}`.
impl Serialize for ActionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pairwise { kind, old, new } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(&format!("old{}Id", kind.pascal()), old)?;
                map.serialize_entry(&format!("new{}Id", kind.pascal()), new)?;
                map.end()
            }
            Self::List { kind, ids } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&format!("{}Ids", kind.resource()), ids)?;
                map.end()
            }
        }
    }
}
