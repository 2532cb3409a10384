#![allow(dead_code)]

use std::sync::Arc;

use augur::{Gateway, HistoricalPoint, PredictionResponse, Session};
use augur_mock::{DynamicMockBackend, DynamicMockController};
use chrono::NaiveDate;

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Three observed closes and two predicted values.
pub fn three_plus_two() -> PredictionResponse {
    PredictionResponse::new(
        vec![
            HistoricalPoint::new(d("2024-04-01"), 100.0),
            HistoricalPoint::new(d("2024-04-02"), 102.0),
            HistoricalPoint::new(d("2024-04-03"), 101.0),
        ],
        vec![103.0, 104.0],
        0.92,
    )
}

pub fn dynamic_session() -> (Arc<Session>, DynamicMockController) {
    let (backend, controller) = DynamicMockBackend::new_with_controller("dyn");
    (Arc::new(Session::new(Gateway::new(backend))), controller)
}
