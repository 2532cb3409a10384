use std::sync::Arc;

use augur_core::{
    AugurError, GatewayConfig, GatewayError, PredictionBackend, PredictionRequest,
    PredictionResponse,
};
use augur_http::HttpBackend;
use chrono::NaiveDate;

/// Forwards prediction requests to a single backend.
///
/// Each call validates its input, then performs exactly one backend call and
/// hands back whatever the backend answered. There is no retry, no backoff
/// and no timeout beyond what the backend's transport applies.
#[derive(Clone)]
pub struct Gateway {
    backend: Arc<dyn PredictionBackend>,
}

/// Builder for constructing a [`Gateway`].
#[derive(Default)]
pub struct GatewayBuilder {
    backend: Option<Arc<dyn PredictionBackend>>,
}

impl GatewayBuilder {
    /// Create an empty builder; a backend must be registered before `build`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `backend` for predictions. A later call replaces an earlier one.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn PredictionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Use an HTTP backend configured from `cfg`.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if the HTTP backend cannot be built.
    pub fn with_http(self, cfg: &GatewayConfig) -> Result<Self, AugurError> {
        let backend = HttpBackend::from_config(cfg)?;
        Ok(self.with_backend(Arc::new(backend)))
    }

    /// Build the gateway.
    ///
    /// # Errors
    /// Returns `AugurError::Config` if no backend was registered.
    pub fn build(self) -> Result<Gateway, AugurError> {
        let backend = self
            .backend
            .ok_or_else(|| AugurError::Config("no prediction backend registered".into()))?;
        Ok(Gateway { backend })
    }
}

impl Gateway {
    /// Gateway over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self { backend }
    }

    /// Start building a gateway.
    #[must_use]
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Gateway over the HTTP backend configured through the environment.
    ///
    /// # Errors
    /// Returns `AugurError::Config` on missing or invalid configuration.
    pub fn from_env() -> Result<Self, AugurError> {
        Ok(Self::new(Arc::new(HttpBackend::from_env()?)))
    }

    /// Name of the backend in use.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Validate `symbol` and the ISO date range, then ask the backend once.
    ///
    /// # Errors
    /// - `GatewayError::InvalidRequest` before any network call if the symbol is
    ///   empty, a date does not parse, or `end_date < start_date`.
    /// - `GatewayError::Network` / `GatewayError::BadResponse` from the backend.
    ///
    /// A domain error from the service is returned as `Ok` with `error` set.
    pub async fn submit(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<PredictionResponse, GatewayError> {
        let req = PredictionRequest::parse(symbol, start_date, end_date)?;
        self.send(&req).await
    }

    /// Same as [`Gateway::submit`] with already-parsed dates.
    ///
    /// # Errors
    /// See [`Gateway::submit`].
    pub async fn submit_dates(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PredictionResponse, GatewayError> {
        let req = PredictionRequest::new(symbol, start_date, end_date)?;
        self.send(&req).await
    }

    /// Send an already-validated request to the backend.
    ///
    /// # Errors
    /// `GatewayError::Network` / `GatewayError::BadResponse` from the backend.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::gateway::send",
            skip(self, req),
            fields(
                backend = self.backend.name(),
                symbol = %req.symbol(),
                start_date = %req.start_date(),
                days = req.day_count(),
            ),
        )
    )]
    pub async fn send(&self, req: &PredictionRequest) -> Result<PredictionResponse, GatewayError> {
        let out = self.backend.predict(req).await;
        #[cfg(feature = "tracing")]
        if let Err(e) = &out {
            tracing::warn!(error = %e, "prediction request failed");
        }
        out
    }
}
