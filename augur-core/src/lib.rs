//! augur-core
//!
//! Core types, traits, and utilities shared across the augur workspace.
//!
//! - `types`: re-exported data model (requests, responses, chart series, errors).
//! - `connector`: the `PredictionBackend` trait implemented by service clients.
//! - `series`: the pure transform from a prediction response to a chart series.
#![warn(missing_docs)]

/// The `PredictionBackend` seam to the external prediction service.
pub mod connector;
/// Chart series construction.
pub mod series;
pub mod types;

pub use connector::PredictionBackend;
pub use series::merge::{merge_series, prediction_date};
pub use types::*;
