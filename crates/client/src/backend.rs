//! Backend access
//!
//! [`Backend`] is the seam the form controller talks through. [`HttpBackend`]
//! is the real implementation on top of `reqwest`; tests substitute their own.

use std::future::Future;
use std::sync::Arc;

use console_core::ApiResponse;
use reqwest::Client;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

// ============================================================================
// Backend Trait
// ============================================================================

/// Something that can POST a JSON body and hand back the response envelope.
///
/// `Ok` means the backend answered with a `{code, message}` body, whatever
/// the code. `Err` means no such body was obtained.
pub trait Backend {
    fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> impl Future<Output = Result<ApiResponse, ClientError>>;
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> impl Future<Output = Result<ApiResponse, ClientError>> {
        (**self).post_json(path, body)
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> impl Future<Output = Result<ApiResponse, ClientError>> {
        (**self).post_json(path, body)
    }
}

// ============================================================================
// HTTP Backend
// ============================================================================

/// HTTP client for the console backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    /// The underlying reqwest HTTP client
    client: Client,
    /// Settings the client was built from
    config: ClientConfig,
}

impl HttpBackend {
    /// Build a client from validated settings
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config
            .validate()
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Settings in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl Backend for HttpBackend {
    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.config.url(path);
        tracing::debug!(%url, "POST");

        // `.json()` also sets `Content-Type: application/json`
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "non-success status");
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<ApiResponse>(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
    }
}
