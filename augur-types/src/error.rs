use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of the request gateway itself.
///
/// A domain error reported by the prediction service is not a gateway error;
/// it arrives as a `PredictionResponse` with `error` set.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GatewayError {
    /// Caller input rejected before any network call (empty symbol, reversed dates, ...).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure: DNS, connection refused, configured timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered, but with a non-success status or an undecodable body.
    #[error("bad response: {0}")]
    BadResponse(String),
}

impl GatewayError {
    /// Helper: build an `InvalidRequest` error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Helper: build a `Network` error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Helper: build a `BadResponse` error.
    pub fn bad_response(msg: impl Into<String>) -> Self {
        Self::BadResponse(msg.into())
    }

    /// True for failures of the HTTP exchange (as opposed to caller input).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::BadResponse(_))
    }
}

/// Failure of the series merger.
#[derive(Debug, Error, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeError {
    /// The response carried an error or no historical points; nothing to chart.
    #[error("no chartable data in prediction response")]
    NoData,
}

/// Everything a prediction session can report back to its caller.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AugurError {
    /// A submission is already in flight; the new one was not started.
    #[error("a prediction request is already in flight")]
    Busy,

    /// The gateway rejected the input or the HTTP exchange failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The prediction service understood the request but could not answer it.
    #[error("prediction service error: {message}")]
    Backend {
        /// Message as reported by the service.
        message: String,
    },

    /// The response could not be turned into a chart.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shown for every failure that is not the service's own explanation.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Could not get a prediction right now. Please try again later.";

impl AugurError {
    /// Helper: build a `Backend` error from the service's message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Text suitable for the end user.
    ///
    /// Transport failures collapse into one generic message; domain errors and
    /// input problems are shown verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend { message } if !message.trim().is_empty() => message.clone(),
            Self::Gateway(GatewayError::InvalidRequest(msg)) => msg.clone(),
            Self::Busy => self.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// True if reporting this error must also clear any chart on screen.
    ///
    /// Rejections that never started a request leave the current chart alone.
    #[must_use]
    pub const fn clears_chart(&self) -> bool {
        !matches!(
            self,
            Self::Busy | Self::Gateway(GatewayError::InvalidRequest(_)) | Self::Config(_)
        )
    }
}
