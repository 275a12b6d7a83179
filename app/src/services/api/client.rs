//! # API Client
//!
//! HTTP client for the delivery API and the JSON-to-[`ApiResult`] mapping
//! shared by every endpoint.

use std::time::Instant;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::NetworkError;

use crate::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::core::result::ApiResult;

/// HTTP client for communicating with the delivery API.
///
/// Holds one `reqwest::Client` (and with it one connection pool) for the
/// lifetime of the screen that owns it.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the given configuration.
    ///
    /// The request timeout comes from [`ApiConfig::timeout`].
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST `body` as JSON to `path` and map the reply.
    ///
    /// - 2xx with a decodable body: `Success`
    /// - 2xx with anything else: `Err(AppError::Decode)`
    /// - any other status: `Failure`, from the body when it is a
    ///   [`NetworkError`], otherwise from the status reason
    /// - no response at all: `Err(AppError::Transport)`
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResult<T, NetworkError>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let start = Instant::now();
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = path, error = %e, "Request failed before a response arrived");
                AppError::Transport(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            let payload = serde_json::from_slice::<T>(&bytes).map_err(|source| {
                tracing::error!(endpoint = path, status = status.as_u16(), error = %source, "Response body did not match contract");
                AppError::Decode {
                    endpoint: path.to_string(),
                    source,
                }
            })?;
            tracing::debug!(endpoint = path, status = status.as_u16(), duration_ms, "Request succeeded");
            return Ok(ApiResult::Success(payload));
        }

        let error = match serde_json::from_slice::<NetworkError>(&bytes) {
            Ok(err) => err,
            Err(_) => NetworkError::new(
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
            ),
        }
        .with_status(status.as_u16());

        tracing::warn!(
            endpoint = path,
            status = status.as_u16(),
            error = %error.message,
            duration_ms,
            "Request rejected by server"
        );
        Ok(ApiResult::Failure(error))
    }
}
