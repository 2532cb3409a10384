use std::time::Duration;

use augur_core::{AugurError, GatewayConfig};

use crate::HttpBackend;

/// Builder for an [`HttpBackend`].
///
/// Starts from a `GatewayConfig`; the timeout and user agent it carries are
/// applied to the `reqwest::Client` built here.
pub struct HttpBackendBuilder {
    cfg: GatewayConfig,
    client: Option<reqwest::Client>,
}

impl HttpBackend {
    /// Returns a builder pointed at `base_url`.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if `base_url` is not an http(s) URL.
    pub fn builder(base_url: &str) -> Result<HttpBackendBuilder, AugurError> {
        Ok(HttpBackendBuilder::new(GatewayConfig::new(base_url)?))
    }
}

impl HttpBackendBuilder {
    /// Builder starting from an existing configuration.
    #[must_use]
    pub const fn new(cfg: GatewayConfig) -> Self {
        Self { cfg, client: None }
    }

    /// Override the endpoint path (default `prediction`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.cfg = self.cfg.with_endpoint(endpoint);
        self
    }

    /// Apply a transport timeout. Without one, calls wait as long as the transport does.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg = self.cfg.with_timeout(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.cfg = self.cfg.with_user_agent(ua);
        self
    }

    /// Use a caller-provided client; timeout and user agent settings are then ignored.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if the endpoint URL is invalid or the
    /// client cannot be constructed.
    pub fn build(self) -> Result<HttpBackend, AugurError> {
        let client = match self.client {
            Some(c) => c,
            None => {
                let mut b = reqwest::Client::builder();
                if let Some(t) = self.cfg.timeout {
                    b = b.timeout(t);
                }
                if let Some(ua) = &self.cfg.user_agent {
                    b = b.user_agent(ua.clone());
                }
                b.build()
                    .map_err(|e| AugurError::Config(format!("failed to build HTTP client: {e}")))?
            }
        };
        HttpBackend::with_client(client, &self.cfg)
    }
}
