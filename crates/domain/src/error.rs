// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{EntityId, EntityKind};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fewer entities are selected than the action requires.
    SelectionTooSmall {
        /// The kind of entity being acted on.
        kind: EntityKind,
        /// The minimum number of selections required.
        required: usize,
        /// The number actually selected.
        selected: usize,
    },
    /// More entities are selected than the action allows.
    SelectionTooLarge {
        /// The kind of entity being acted on.
        kind: EntityKind,
        /// The maximum number of selections allowed.
        allowed: usize,
        /// The number actually selected.
        selected: usize,
    },
    /// A fetched collection contains the same id more than once.
    DuplicateEntityId {
        /// The kind of entity in the collection.
        kind: EntityKind,
        /// The repeated identifier.
        id: EntityId,
    },
    /// A fetched collection could not be decoded into rows.
    InvalidCollection {
        /// The kind of entity in the collection.
        kind: EntityKind,
        /// The decoder's description of the problem.
        reason: String,
    },
    /// The named column exists but cannot be sorted.
    NotSortable(String),
    /// No column with this key exists on the screen.
    UnknownColumn(String),
    /// The string does not name an entity kind.
    UnknownEntityKind(String),
}

/// Spells out small counts the way the screens' prompts do.
fn count_word(count: usize) -> String {
    match count {
        1 => String::from("one"),
        2 => String::from("two"),
        3 => String::from("three"),
        other => other.to_string(),
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectionTooSmall { kind, required, .. } => {
                let noun: &str = if *required == 1 {
                    kind.singular()
                } else {
                    kind.plural()
                };
                write!(f, "Please select at least {} {noun}.", count_word(*required))
            }
            Self::SelectionTooLarge { kind, allowed, .. } => {
                write!(
                    f,
                    "Please select only {} {} to merge.",
                    count_word(*allowed),
                    kind.plural()
                )
            }
            Self::DuplicateEntityId { kind, id } => {
                write!(f, "Collection of {} contains id {id} more than once", kind.plural())
            }
            Self::InvalidCollection { kind, reason } => {
                write!(f, "Invalid {} collection: {reason}", kind.singular())
            }
            Self::NotSortable(column) => write!(f, "Column '{column}' is not sortable"),
            Self::UnknownColumn(column) => write!(f, "Unknown column '{column}'"),
            Self::UnknownEntityKind(kind) => {
                write!(
                    f,
                    "Unknown entity kind '{kind}'. Expected debater, institution, or judge"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
