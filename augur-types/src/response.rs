//! Decoded prediction service response.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::request::{ISO_DATE, iso_date};

/// One observed closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Trading day of the observation.
    #[serde(
        serialize_with = "iso_date::serialize",
        deserialize_with = "lenient_date"
    )]
    pub date: NaiveDate,
    /// Observed price.
    pub price: f64,
}

impl HistoricalPoint {
    /// Construct a point.
    #[must_use]
    pub const fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// What the prediction service returned for one request.
///
/// A present `error` marks the response as failed regardless of the other
/// fields. `accuracy` is passed through as reported by the service; no range
/// check is applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Observed prices, chronological.
    #[serde(default)]
    pub historical_data: Vec<HistoricalPoint>,
    /// Predicted prices, one per future day.
    #[serde(default)]
    pub predicted_data: Vec<f64>,
    /// Model fit reported by the service.
    #[serde(default)]
    pub accuracy: f64,
    /// Domain failure reported by the service (unknown symbol, too little history, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Successful response.
    #[must_use]
    pub const fn new(
        historical_data: Vec<HistoricalPoint>,
        predicted_data: Vec<f64>,
        accuracy: f64,
    ) -> Self {
        Self {
            historical_data,
            predicted_data,
            accuracy,
            error: None,
        }
    }

    /// Response carrying only a domain error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// True when the service reported a domain error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The domain error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Most recent observed point.
    #[must_use]
    pub fn last_historical(&self) -> Option<&HistoricalPoint> {
        self.historical_data.last()
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339; keeps the calendar date.
fn lenient_date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(d)?;
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE) {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("unrecognized date '{raw}'")))
}
