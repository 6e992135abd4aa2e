//! HTTP client for the qrngapi.com entropy service
//!
//! Implements request construction, dispatch, and response decoding for the
//! two service operations. Every call is a single request/response exchange
//! with no retries, no caching, and no shared mutable state.

use crate::{
    error::{Error, Result},
    protocol::{EntropyResult, GenerateOptions, HealthStatus},
};
use reqwest::{ClientBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Header carrying the API credential on every request
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credential, passed through without validation
    pub api_key: String,
    /// Service origin; override to point at a test server
    pub base_url: String,
    /// Timeout covering the whole round-trip, body included
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Client for the QRNG API
///
/// Holds the credential, the service origin, and a pooled HTTP transport.
/// Methods take `&self`, so one instance can serve any number of concurrent
/// tasks; cloning is cheap and clones share the transport.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client for the production service
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with explicit configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(config.timeout)
            .use_rustls_tls()
            .build()
            .map_err(Error::Transport)?;

        Ok(Self { http, config })
    }

    /// Request signed entropy from the service
    ///
    /// `GenerateOptions::default()` asks for 32 hex-encoded bytes, matching
    /// the service defaults.
    #[instrument(skip(self, options), fields(bytes = options.bytes))]
    pub async fn generate(&self, options: GenerateOptions) -> Result<EntropyResult> {
        let url = self.generate_url(&options)?;
        self.get_json(url).await
    }

    /// Query the service health endpoint
    ///
    /// Rejections are classified exactly like [`generate`]'s, so a failing
    /// service surfaces as [`Error::Api`] rather than a decode failure on an
    /// error body.
    ///
    /// [`generate`]: Client::generate
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint_url("/api/health")?;
        self.get_json(url).await
    }

    /// Build the `/api/random` URL with the assembled query string
    fn generate_url(&self, options: &GenerateOptions) -> Result<Url> {
        let mut url = self.endpoint_url("/api/random")?;

        // The service distinguishes absent from empty for the optional
        // selectors, so empty values are never sent.
        let format = if options.format.is_empty() {
            crate::DEFAULT_FORMAT
        } else {
            options.format.as_str()
        };

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("bytes", &options.bytes.to_string());
            pairs.append_pair("format", format);
            if let Some(method) = options.method.as_deref().filter(|m| !m.is_empty()) {
                pairs.append_pair("method", method);
            }
            if let Some(sig) = options.signature_type.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("signatureType", sig);
            }
        }

        Ok(url)
    }

    /// Resolve a service path against the configured origin
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path)).map_err(Error::RequestBuild)
    }

    /// Issue an authenticated GET and decode the JSON response
    ///
    /// The full body is read before the status is inspected, so error
    /// responses are classified from their content.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!("request to {} failed: {}", url, e);
                Error::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::BodyRead)?;

        if status != StatusCode::OK {
            warn!("HTTP error {} from {}", status, url);
            return Err(classify_rejection(status, &body));
        }

        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Error body shape the service uses for rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Classify a non-success response, preferring the service's own message
///
/// Falls back to the verbatim status and body text when the body is not a
/// JSON object carrying a string `error` field. The fallback accepts empty,
/// non-JSON, and non-UTF-8 bodies.
fn classify_rejection(status: StatusCode, body: &[u8]) -> Error {
    if let Ok(ErrorBody {
        error: Some(message),
    }) = serde_json::from_slice(body)
    {
        return Error::Api { status, message };
    }

    Error::Api {
        status,
        message: format!("HTTP {}: {}", status.as_u16(), String::from_utf8_lossy(body)),
    }
}
