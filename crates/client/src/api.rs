// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The remote collaborator the screens fetch from and submit to.

use crate::config::ClientConfig;
use crate::error::ClientError;
use reqwest::{Client, Response, Url, header};
use std::future::Future;
use tab_admin_domain::{ActionRequest, EntityKind, EntityRecord, decode_collection};
use tracing::debug;

/// Fetches entity collections and accepts bulk actions.
pub trait EntityApi: Send + Sync {
    /// Fetches the full collection for `kind`, aggregates included.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not decode into rows with unique ids.
    fn fetch_collection(
        &self,
        kind: EntityKind,
    ) -> impl Future<Output = Result<Vec<EntityRecord>, ClientError>> + Send;

    /// Sends a bulk action. Only the status matters; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    fn submit(&self, request: &ActionRequest)
    -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// [`EntityApi`] over the tournament's JSON REST API.
#[derive(Debug, Clone)]
pub struct HttpEntityApi {
    client: Client,
    config: ClientConfig,
}

impl HttpEntityApi {
    /// Creates a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client: Client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn list_url(&self, kind: EntityKind) -> Result<Url, ClientError> {
        self.config
            .endpoint(&[kind.resource(), kind.list_path()])
    }

    fn action_url(&self, kind: EntityKind) -> Result<Url, ClientError> {
        self.config
            .endpoint(&[kind.resource(), kind.action_path()])
    }
}

/// Turns a non-2xx response into `ClientError::Status`, keeping its body.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status: reqwest::StatusCode = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // An unreadable body is reported as empty rather than masking the status.
    let body: String = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

impl EntityApi for HttpEntityApi {
    async fn fetch_collection(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, ClientError> {
        let url: Url = self.list_url(kind)?;
        debug!(kind = %kind, url = %url, "Fetching collection");

        let response: Response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = ensure_success(response).await?.bytes().await?;

        decode_collection(kind, &body).map_err(|source| ClientError::Decode { kind, source })
    }

    async fn submit(&self, request: &ActionRequest) -> Result<(), ClientError> {
        let url: Url = self.action_url(request.kind())?;
        debug!(kind = %request.kind(), url = %url, count = request.len(), "Submitting action");

        let response: Response = self.client.post(url).json(request).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
