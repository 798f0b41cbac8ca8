//! # Live HTTP adapter for KPS Public
//!
//! Production implementation of [`KpsPublicAdapter`] against the real NVI
//! SOAP endpoint. Wraps a `reqwest::Client` with the fixed endpoint URL
//! and the SOAP 1.2 request/response mapping. The adapter is
//! `Send + Sync` and designed to be shared via `Arc` across async tasks.
//!
//! ## Timeout & retry
//!
//! No timeout is configured by default; callers needing one set
//! [`KpsPublicConfig::timeout_secs`], which applies at the transport
//! layer. Retries are not performed: one call is one exchange.

use std::time::Duration;

use url::Url;

use crate::error::KpsError;
use crate::kps::{CitizenQuery, KpsPublicAdapter};
use crate::soap;

/// Configuration for the KPS Public HTTP adapter.
#[derive(Debug, Clone)]
pub struct KpsPublicConfig {
    /// Endpoint URL of the verification service.
    /// Default: <https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx>
    pub endpoint_url: String,
    /// Request timeout in seconds. `None` (the default) leaves the
    /// exchange unbounded; the caller owns any deadline.
    pub timeout_secs: Option<u64>,
}

impl Default for KpsPublicConfig {
    fn default() -> Self {
        Self {
            endpoint_url: soap::KPS_PUBLIC_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl KpsPublicConfig {
    /// Create a configuration with a non-default endpoint (staging, mock
    /// servers) and no timeout.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout_secs: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `NVI_KPS_ENDPOINT` (default: the production endpoint)
    /// - `NVI_KPS_TIMEOUT_SECS` (default: unset)
    pub fn from_env() -> Self {
        Self {
            endpoint_url: std::env::var("NVI_KPS_ENDPOINT")
                .unwrap_or_else(|_| soap::KPS_PUBLIC_ENDPOINT.to_string()),
            timeout_secs: std::env::var("NVI_KPS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}

/// Real HTTP client for KPS Public citizen verification.
///
/// Performs one synchronous SOAP 1.2 exchange per
/// [`verify_citizen`](KpsPublicAdapter::verify_citizen) call. The trait
/// method is synchronous and uses `Handle::block_on` internally, so it
/// must not be called from an async task directly; wrap calls in
/// `tokio::task::spawn_blocking`.
#[derive(Debug)]
pub struct HttpKpsPublicAdapter {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpKpsPublicAdapter {
    /// Create a new KPS Public HTTP adapter from configuration.
    pub fn new(config: KpsPublicConfig) -> Result<Self, KpsError> {
        let endpoint =
            Url::parse(&config.endpoint_url).map_err(|e| KpsError::NotConfigured {
                reason: format!("invalid endpoint URL '{}': {e}", config.endpoint_url),
            })?;

        let timeout = config.timeout_secs.map(Duration::from_secs);
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| KpsError::ServiceUnavailable {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Accessor for the configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.map(|d| d.as_millis() as u64).unwrap_or(0)
    }
}

impl KpsPublicAdapter for HttpKpsPublicAdapter {
    fn verify_citizen(&self, query: &CitizenQuery) -> Result<bool, KpsError> {
        let envelope = soap::build_verify_envelope(query);
        let body = envelope.into_bytes();
        let content_length = body.len();

        let rt = tokio::runtime::Handle::try_current().map_err(|_| {
            KpsError::ServiceUnavailable {
                reason: "no async runtime available for HTTP request".into(),
            }
        })?;

        rt.block_on(async {
            tracing::debug!(
                endpoint = %self.endpoint,
                content_length,
                "dispatching TCKimlikNoDogrula request"
            );

            let resp = self
                .client
                .post(self.endpoint.clone())
                .header(reqwest::header::CONTENT_TYPE, soap::SOAP_CONTENT_TYPE)
                .header(reqwest::header::CONTENT_LENGTH, content_length)
                .body(body)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        KpsError::Timeout {
                            elapsed_ms: self.timeout_ms(),
                        }
                    } else {
                        tracing::warn!("KPS exchange failed before a response: {e}");
                        KpsError::ServiceUnavailable {
                            reason: format!("verify_citizen: {e}"),
                        }
                    }
                })?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                tracing::warn!(%status, "KPS returned a non-success status");
                return Err(KpsError::ServiceUnavailable {
                    reason: format!("verify_citizen: HTTP {status}: {body}"),
                });
            }

            let text = resp.text().await.map_err(|e| KpsError::MalformedResponse {
                reason: format!("failed to read response body: {e}"),
            })?;

            soap::parse_verify_response(&text)
        })
    }

    fn adapter_name(&self) -> &str {
        "HttpKpsPublicAdapter"
    }
}
