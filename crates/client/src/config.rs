// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use reqwest::Url;
use std::time::Duration;

/// Default base of the tournament REST API.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; entity resources are appended as path segments.
    pub base_url: Url,
    /// Applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a configuration from a base URL string.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `http://localhost:8080/api/v1`
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the string is not an absolute
    /// URL that can carry path segments.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let url: Url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidUrl(base_url.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: url,
            timeout,
        })
    }

    /// The URL of `segments` beneath the base.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the base cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url: Url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
