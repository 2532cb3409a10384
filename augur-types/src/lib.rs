//! Augur data transfer objects and configuration primitives.
//!
//! - `request`: the validated outbound `PredictionRequest` and day-count conversion.
//! - `response`: the decoded `PredictionResponse` and its `HistoricalPoint`s.
//! - `chart`: the chart-ready `ChartSeries` produced by the series merger.
//! - `error`: gateway, merge and session errors.
//! - `config`: where to find the prediction service.
#![warn(missing_docs)]

mod chart;
mod config;
/// Error types shared across the workspace.
pub mod error;
mod request;
mod response;

pub use chart::{ChartPoint, ChartSeries};
pub use config::{ENV_BACKEND_ENDPOINT, ENV_BACKEND_TIMEOUT_MS, ENV_BACKEND_URL, GatewayConfig};
pub use error::{AugurError, GENERIC_FAILURE_MESSAGE, GatewayError, MergeError};
pub use request::{ISO_DATE, PredictionRequest, day_count};
pub use response::{HistoricalPoint, PredictionResponse};
