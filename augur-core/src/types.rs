//! Re-export of foundational types from `augur-types`.
// Consolidated re-exports so downstream crates can depend on `augur-core` only

pub use augur_types::{AugurError, GatewayError, MergeError};

pub use augur_types::{
    ChartPoint, ChartSeries, HistoricalPoint, ISO_DATE, PredictionRequest, PredictionResponse,
    day_count,
};

pub use augur_types::{
    ENV_BACKEND_ENDPOINT, ENV_BACKEND_TIMEOUT_MS, ENV_BACKEND_URL, GENERIC_FAILURE_MESSAGE,
    GatewayConfig,
};
