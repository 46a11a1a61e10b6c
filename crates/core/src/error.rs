// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tab_admin_domain::{DomainError, EntityId};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The id is not part of the currently displayed collection.
    UnknownEntity(EntityId),
    /// A bulk action is already waiting for the server.
    ActionInFlight,
    /// A completion arrived for a request that is no longer current.
    StaleCompletion,
    /// The view is not mounted.
    NotMounted,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::UnknownEntity(id) => write!(f, "No row with id {id} is displayed"),
            Self::ActionInFlight => write!(f, "An action is already in progress"),
            Self::StaleCompletion => write!(f, "Ignoring completion for a superseded request"),
            Self::NotMounted => write!(f, "The view is not active"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
