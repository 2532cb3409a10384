//! Outbound prediction request.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Calendar date format used on every wire surface.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// A validated request for a price prediction.
///
/// Built fresh per submission and consumed once by the gateway. Serializes to
/// the body the prediction service expects:
/// `{"symbol": "AAPL", "start_date": "2024-04-01", "days": 10}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    symbol: String,
    #[serde(with = "iso_date")]
    start_date: NaiveDate,
    #[serde(rename = "days")]
    day_count: u32,
}

impl PredictionRequest {
    /// Build a request from a symbol and an inclusive-start date range.
    ///
    /// The symbol is trimmed; `day_count` is the whole number of days between
    /// `start_date` and `end_date`.
    ///
    /// # Errors
    /// Returns `GatewayError::InvalidRequest` if the symbol is empty or
    /// `end_date` precedes `start_date`.
    pub fn new(
        symbol: impl AsRef<str>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, GatewayError> {
        let symbol = symbol.as_ref().trim();
        if symbol.is_empty() {
            return Err(GatewayError::invalid_request("symbol must not be empty"));
        }
        let day_count = day_count(start_date, end_date)?;
        Ok(Self {
            symbol: symbol.to_string(),
            start_date,
            day_count,
        })
    }

    /// Build a request from ISO `YYYY-MM-DD` date strings.
    ///
    /// # Errors
    /// Returns `GatewayError::InvalidRequest` if either date does not parse or
    /// the same conditions as [`PredictionRequest::new`] are violated.
    pub fn parse(symbol: &str, start_date: &str, end_date: &str) -> Result<Self, GatewayError> {
        let start = parse_iso_date("start_date", start_date)?;
        let end = parse_iso_date("end_date", end_date)?;
        Self::new(symbol, start, end)
    }

    /// Ticker symbol, trimmed.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// First day of the requested range; also the chart anchor date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Number of whole days in the requested range.
    #[must_use]
    pub const fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Last day of the requested range.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.day_count)))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Whole days between `start` and `end`.
///
/// # Errors
/// Returns `GatewayError::InvalidRequest` if `end` is before `start` or the
/// span does not fit in a `u32`.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> Result<u32, GatewayError> {
    let days = end.signed_duration_since(start).num_days();
    if days < 0 {
        return Err(GatewayError::invalid_request(format!(
            "end_date {end} is before start_date {start}"
        )));
    }
    u32::try_from(days)
        .map_err(|_| GatewayError::invalid_request(format!("date range of {days} days is too long")))
}

fn parse_iso_date(field: &str, raw: &str) -> Result<NaiveDate, GatewayError> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE)
        .map_err(|e| GatewayError::invalid_request(format!("{field} '{raw}': {e}")))
}

pub(crate) mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::ISO_DATE;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(ISO_DATE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, ISO_DATE).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_DATE).unwrap()
    }

    #[test]
    fn ten_day_range() {
        let req = PredictionRequest::parse("AAPL", "2024-04-01", "2024-04-11").unwrap();
        assert_eq!(req.day_count(), 10);
        assert_eq!(req.end_date(), date("2024-04-11"));
    }

    #[test]
    fn same_day_range_is_zero() {
        assert_eq!(day_count(date("2024-02-29"), date("2024-02-29")).unwrap(), 0);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = PredictionRequest::parse("AAPL", "2024-04-11", "2024-04-01").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }

    #[test]
    fn blank_symbol_is_rejected() {
        let err = PredictionRequest::parse("  ", "2024-04-01", "2024-04-02").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let err = PredictionRequest::parse("AAPL", "04/01/2024", "2024-04-02").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }
}
