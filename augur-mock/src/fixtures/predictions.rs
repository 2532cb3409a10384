use augur_core::{HistoricalPoint, PredictionRequest, PredictionResponse};
use chrono::Days;

/// Days of history placed before the requested start date.
const HISTORY_DAYS: u32 = 5;

/// Upper bound on generated predictions, about ten years of days.
pub const MAX_PREDICTED_DAYS: u32 = 3650;

struct Profile {
    last_close: f64,
    daily_drift: f64,
    accuracy: f64,
}

fn profile(symbol: &str) -> Option<Profile> {
    match symbol {
        "AAPL" => Some(Profile {
            last_close: 170.0,
            daily_drift: 0.75,
            accuracy: 0.93,
        }),
        "MSFT" => Some(Profile {
            last_close: 420.0,
            daily_drift: 1.5,
            accuracy: 0.91,
        }),
        "GOOG" => Some(Profile {
            last_close: 150.0,
            daily_drift: -0.5,
            accuracy: 0.88,
        }),
        "TSLA" => Some(Profile {
            last_close: 175.0,
            daily_drift: -2.0,
            accuracy: 0.71,
        }),
        _ => None,
    }
}

/// Deterministic response for a request, or `None` if the symbol has no fixture.
///
/// History covers the five days before `start_date`; one predicted value is
/// produced per requested day, up to [`MAX_PREDICTED_DAYS`].
pub fn by_request(req: &PredictionRequest) -> Option<PredictionResponse> {
    let p = profile(req.symbol())?;
    let start = req.start_date();

    let historical_data = (1..=HISTORY_DAYS)
        .rev()
        .filter_map(|back| {
            let date = start.checked_sub_days(Days::new(u64::from(back)))?;
            let price = p.last_close - p.daily_drift * f64::from(back - 1);
            Some(HistoricalPoint::new(date, round_cents(price)))
        })
        .collect();

    let predicted_data = (1..=req.day_count().min(MAX_PREDICTED_DAYS))
        .map(|ahead| round_cents(p.last_close + p.daily_drift * f64::from(ahead)))
        .collect();

    Some(PredictionResponse::new(historical_data, predicted_data, p.accuracy))
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
