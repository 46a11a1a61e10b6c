// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for talking to the tournament API.

use tab_admin_domain::{DomainError, EntityKind};
use thiserror::Error;

/// Errors raised by an [`EntityApi`](crate::EntityApi) call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! Status: {status}, Body: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body text, possibly empty.
        body: String,
    },

    /// A list response could not be turned into grid rows.
    #[error("Failed to decode {kind} list: {source}")]
    Decode {
        /// The kind that was being fetched.
        kind: EntityKind,
        /// What was wrong with the body.
        source: DomainError,
    },

    /// The configured base URL cannot address the API.
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),
}

impl ClientError {
    /// The HTTP status code, for server-side failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode { .. } | Self::InvalidUrl(_) => None,
        }
    }
}
