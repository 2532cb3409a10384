//! augur-http
//!
//! `PredictionBackend` implementation that talks to the external prediction
//! service over HTTP. One `POST {base_url}/{endpoint}` per prediction with a
//! JSON body `{"symbol", "start_date", "days"}`; the response body is decoded
//! (including the double-encoded form) into a `PredictionResponse`.
#![warn(missing_docs)]

/// Builder for configuring the underlying HTTP client.
pub mod builder;
/// Response body decoding.
pub mod decode;

use async_trait::async_trait;
use augur_core::{
    AugurError, GatewayConfig, GatewayError, PredictionBackend, PredictionRequest,
    PredictionResponse,
};
use url::Url;

pub use builder::HttpBackendBuilder;
pub use decode::decode_body;

/// Public backend type. Production users construct it with `HttpBackend::from_config`
/// or `HttpBackend::from_env`.
pub struct HttpBackend {
    client: reqwest::Client,
    url: Url,
}

impl HttpBackend {
    /// Static backend name used in logs.
    pub const NAME: &'static str = "augur-http";

    /// Build a backend with a fresh `reqwest::Client` configured from `cfg`.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if the endpoint URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn from_config(cfg: &GatewayConfig) -> Result<Self, AugurError> {
        HttpBackendBuilder::new(cfg.clone()).build()
    }

    /// Build from `AUGUR_BACKEND_URL` and friends.
    ///
    /// # Errors
    /// Returns `AugurError::Config` on missing or invalid configuration.
    pub fn from_env() -> Result<Self, AugurError> {
        Self::from_config(&GatewayConfig::from_env()?)
    }

    /// Build from an existing `reqwest::Client`; `cfg.timeout` and
    /// `cfg.user_agent` are ignored in favour of the client's own settings.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if the endpoint URL is invalid.
    pub fn with_client(client: reqwest::Client, cfg: &GatewayConfig) -> Result<Self, AugurError> {
        Ok(Self {
            client,
            url: cfg.prediction_url()?,
        })
    }

    /// The endpoint this backend posts to.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    fn normalize_error(e: &reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::network(format!("request timed out: {e}"))
        } else if e.is_decode() {
            GatewayError::bad_response(format!("could not read body: {e}"))
        } else {
            GatewayError::network(e.to_string())
        }
    }
}

#[async_trait]
impl PredictionBackend for HttpBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "HTTP prediction service"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur_http::predict",
            skip(self, req),
            fields(url = %self.url, symbol = %req.symbol(), days = req.day_count()),
        )
    )]
    async fn predict(&self, req: &PredictionRequest) -> Result<PredictionResponse, GatewayError> {
        let resp = self
            .client
            .post(self.url.clone())
            .json(req)
            .send()
            .await
            .map_err(|e| Self::normalize_error(&e))?;

        let status = resp.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!(status = status.as_u16(), "prediction service returned non-success status");
            return Err(GatewayError::bad_response(format!(
                "prediction service returned status {status}"
            )));
        }

        let body = resp.text().await.map_err(|e| Self::normalize_error(&e))?;
        let decoded = decode_body(&body);
        #[cfg(feature = "tracing")]
        match &decoded {
            Ok(r) => tracing::debug!(
                historical = r.historical_data.len(),
                predicted = r.predicted_data.len(),
                domain_error = r.is_error(),
                "decoded prediction response"
            ),
            Err(e) => tracing::warn!(error = %e, "undecodable prediction response"),
        }
        decoded
    }
}
