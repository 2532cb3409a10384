//! augur-mock
//!
//! Prediction backends for CI-safe tests and demos:
//! - [`MockBackend`]: deterministic fixture data keyed by symbol.
//! - [`DynamicMockBackend`]: behavior driven by a [`DynamicMockController`].
use async_trait::async_trait;
use augur_core::{GatewayError, PredictionBackend, PredictionRequest, PredictionResponse};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockBackend, DynamicMockController, MockBehavior};
pub use fixtures::predictions::MAX_PREDICTED_DAYS;

/// Mock backend for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Reserved symbols:
/// - `FAIL`: transport failure (`GatewayError::Network`).
/// - `BADBODY`: undecodable body (`GatewayError::BadResponse`).
/// - `EMPTY`: successful response without any data.
///
/// `AAPL`, `MSFT`, `GOOG` and `TSLA` have fixtures; any other symbol gets a
/// domain error response (`"unknown symbol: ..."`).
pub struct MockBackend;

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &str) -> Result<(), GatewayError> {
        match symbol {
            "FAIL" => Err(GatewayError::network("forced failure: connection refused")),
            "BADBODY" => Err(GatewayError::bad_response("forced failure: body is not JSON")),
            _ => Ok(()),
        }
    }
}

/// Response for a request that has no explicit rule: fixture data or an unknown-symbol error.
pub(crate) fn fixture_or_unknown(req: &PredictionRequest) -> PredictionResponse {
    if req.symbol() == "EMPTY" {
        return PredictionResponse::new(vec![], vec![], 0.0);
    }
    fixtures::predictions::by_request(req)
        .unwrap_or_else(|| PredictionResponse::failed(format!("unknown symbol: {}", req.symbol())))
}

#[async_trait]
impl PredictionBackend for MockBackend {
    fn name(&self) -> &'static str {
        "augur-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn predict(&self, req: &PredictionRequest) -> Result<PredictionResponse, GatewayError> {
        Self::maybe_fail(req.symbol())?;
        Ok(fixture_or_unknown(req))
    }
}
