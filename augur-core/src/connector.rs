use async_trait::async_trait;

use crate::{GatewayError, PredictionRequest, PredictionResponse};

/// A source of price predictions.
///
/// Implementations perform exactly one call to the prediction service per
/// `predict` invocation: no retry, no backoff. A domain failure reported by
/// the service (unknown symbol, ...) is returned as `Ok` with
/// `PredictionResponse::error` set, not as an `Err`.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// A stable identifier for logs (e.g. "augur-http", "augur-mock").
    fn name(&self) -> &'static str;

    /// Human-readable description of where predictions come from.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Ask the service for a prediction.
    ///
    /// # Errors
    /// `GatewayError::Network` for transport failures and
    /// `GatewayError::BadResponse` for non-success statuses or undecodable bodies.
    async fn predict(&self, req: &PredictionRequest) -> Result<PredictionResponse, GatewayError>;
}
