//! Configuration for reaching the prediction service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AugurError;

/// Environment variable holding the service base URL.
pub const ENV_BACKEND_URL: &str = "AUGUR_BACKEND_URL";
/// Environment variable overriding the prediction endpoint path.
pub const ENV_BACKEND_ENDPOINT: &str = "AUGUR_BACKEND_ENDPOINT";
/// Environment variable setting a transport timeout in milliseconds.
pub const ENV_BACKEND_TIMEOUT_MS: &str = "AUGUR_BACKEND_TIMEOUT_MS";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_ENDPOINT: &str = "prediction";

/// Where and how to call the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the service, e.g. `https://ml.example.com`.
    pub base_url: Url,
    /// Path of the prediction endpoint relative to `base_url`.
    pub endpoint: String,
    /// Transport timeout. `None` means wait for as long as the transport does.
    pub timeout: Option<Duration>,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl GatewayConfig {
    /// Config pointing at `base_url` with default endpoint and no timeout.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, AugurError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Load from `AUGUR_BACKEND_URL` (required), `AUGUR_BACKEND_ENDPOINT` and
    /// `AUGUR_BACKEND_TIMEOUT_MS` (optional).
    ///
    /// # Errors
    /// Returns `AugurError::Config` if the URL is missing or invalid, or the
    /// timeout is not a positive integer.
    pub fn from_env() -> Result<Self, AugurError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] but reading through `lookup`.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AugurError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(ENV_BACKEND_URL)
            .ok_or_else(|| AugurError::Config(format!("{ENV_BACKEND_URL} is not set")))?;
        let mut cfg = Self::new(&base)?;
        if let Some(endpoint) = lookup(ENV_BACKEND_ENDPOINT) {
            cfg = cfg.with_endpoint(endpoint);
        }
        if let Some(raw) = lookup(ENV_BACKEND_TIMEOUT_MS) {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                AugurError::Config(format!("{ENV_BACKEND_TIMEOUT_MS} must be an integer, got '{raw}'"))
            })?;
            if ms == 0 {
                return Err(AugurError::Config(format!(
                    "{ENV_BACKEND_TIMEOUT_MS} must be greater than zero"
                )));
            }
            cfg = cfg.with_timeout(Duration::from_millis(ms));
        }
        Ok(cfg)
    }

    /// Override the endpoint path.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Full URL of the prediction endpoint.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if the endpoint cannot be joined onto the base.
    pub fn prediction_url(&self) -> Result<Url, AugurError> {
        let mut base = self.base_url.clone();
        // Url::join replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(self.endpoint.trim_start_matches('/'))
            .map_err(|e| AugurError::Config(format!("invalid endpoint '{}': {e}", self.endpoint)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, AugurError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AugurError::Config(format!("invalid base url '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AugurError::Config(format!(
            "base url must use http or https, got '{other}'"
        ))),
    }
}
