//! Augur turns a stock symbol and a date range into a chart of observed and
//! predicted prices.
//!
//! Overview
//! - [`Gateway`] validates the input, computes the day count, and forwards one
//!   request to an external prediction service through a
//!   [`PredictionBackend`] (the HTTP client lives in `augur-http`).
//! - [`merge_series`] turns the service's response into a [`ChartSeries`]:
//!   one date axis, an `actual` column and a `predicted` column that meet at a
//!   shared anchor point.
//! - [`Lifecycle`] is the pure `Idle -> Loading -> {Success, Failed}` state
//!   machine; [`Session`] drives it for one user and guarantees at most one
//!   request in flight.
//!
//! Key behaviors and trade-offs
//! - No retry or backoff. A hung backend leaves the session in `Loading`
//!   until the transport gives up; set a timeout on the HTTP backend if that
//!   is not acceptable. Dropping a pending `submit` future settles the session
//!   as failed instead.
//! - A domain error from the service (e.g. unknown symbol) is a successful HTTP
//!   exchange and is reported as `AugurError::Backend`, separate from transport
//!   failures.
//! - The anchor row uses the selected start date, not the last observation's
//!   own date, so the two lines render as one continuous line.
//!
//! Examples
//! ```rust,ignore
//! use augur::{Gateway, Session};
//!
//! let session = Session::new(Gateway::from_env()?);
//! let chart = session.submit("AAPL", "2024-04-01", "2024-04-11").await?;
//! for row in chart.points() {
//!     println!("{} {:?} {:?}", row.date, row.actual, row.predicted);
//! }
//! ```
#![warn(missing_docs)]

mod gateway;
/// Request lifecycle state machine.
pub mod lifecycle;
mod session;

pub use gateway::{Gateway, GatewayBuilder};
pub use lifecycle::{Action, Event, Lifecycle, Phase, PhaseKind};
pub use session::{Session, SessionView};

pub use augur_http::HttpBackend;

// Re-export core types for convenience
pub use augur_core::{
    AugurError, ChartPoint, ChartSeries, GENERIC_FAILURE_MESSAGE, GatewayConfig, GatewayError,
    HistoricalPoint, MergeError, PredictionBackend, PredictionRequest, PredictionResponse,
    day_count, merge_series,
};

/// Re-export of the `augur-core` crate.
pub use augur_core as core;
