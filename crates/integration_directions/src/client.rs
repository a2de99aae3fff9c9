//! HTTP directions client
//!
//! Runs one request through normalize → resolve → build URL → GET → map.
//! The client never retries; every failure is returned to the caller.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, Response};
use tokio::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::{DirectionsResponse, map_response};
use crate::query::{build_directions_url, redacted};
use crate::request::DirectionsRequest;

/// Trait for directions service clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Fetch directions for a single request
    async fn directions(
        &self,
        request: DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError>;
}

/// Directions client backed by the provider's HTTP API
#[derive(Debug)]
pub struct HttpDirectionsClient {
    client: Client,
    config: DirectionsConfig,
}

impl HttpDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        config
            .validate()
            .map_err(DirectionsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DirectionsError::ConfigurationError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client around an existing `reqwest` client
    ///
    /// The configured timeout and user agent are not applied; the given
    /// client's own settings are used.
    pub fn with_client(client: Client, config: DirectionsConfig) -> Result<Self, DirectionsError> {
        config
            .validate()
            .map_err(DirectionsError::ConfigurationError)?;
        Ok(Self { client, config })
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    /// Perform the GET and return the bounded response body
    async fn execute(&self, url: Url) -> Result<Vec<u8>, DirectionsError> {
        debug!(url = %redacted(&url), "Requesting directions");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = read_limited(response, self.config.max_body_bytes)
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).trim().to_string();
            warn!(status = status.as_u16(), "Directions API returned an error status");
            return Err(DirectionsError::Api {
                status_code: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Err(DirectionsError::EmptyResponse);
        }

        Ok(body)
    }

    fn transport_error(&self, error: &reqwest::Error) -> DirectionsError {
        if error.is_timeout() {
            DirectionsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            DirectionsError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl DirectionsClient for HttpDirectionsClient {
    #[instrument(skip(self, request), fields(mode = %request.mode))]
    async fn directions(
        &self,
        request: DirectionsRequest,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let resolved = request.resolve()?;
        debug!(
            origin = resolved.origin.kind(),
            destination = resolved.destination.kind(),
            mode = %resolved.mode,
            "Resolved directions request"
        );

        let api_key = self.config.api_key().ok_or(DirectionsError::MissingApiKey)?;
        let url = build_directions_url(&self.config.base_url, &resolved.query_pairs(), api_key)?;

        let payload = self.execute(url).await?;
        let response = map_response(&payload, resolved.mode)?;

        debug!(steps = response.steps.len(), "Directions mapped");
        Ok(response)
    }
}

/// Read at most `limit` bytes of the body; anything beyond is discarded
async fn read_limited(mut response: Response, limit: usize) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = limit - body.len();
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Run a directions future until `deadline`
///
/// Dropping the future on expiry aborts whichever request is in flight.
///
/// # Errors
///
/// Returns [`DirectionsError::DeadlineExceeded`] when the deadline passes
/// first, otherwise the future's own result.
pub async fn with_deadline<F, T>(deadline: Instant, future: F) -> Result<T, DirectionsError>
where
    F: Future<Output = Result<T, DirectionsError>>,
{
    tokio::time::timeout_at(deadline, future)
        .await
        .map_err(|_| DirectionsError::DeadlineExceeded)?
}
