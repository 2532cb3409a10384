use augur_types::{ChartSeries, HistoricalPoint, PredictionRequest, PredictionResponse};
use chrono::NaiveDate;
use serde_json::json;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn request_serializes_to_service_body() {
    let req = PredictionRequest::parse("AAPL", "2024-04-01", "2024-04-11").unwrap();
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        json!({"symbol": "AAPL", "start_date": "2024-04-01", "days": 10})
    );
}

#[test]
fn response_accepts_timestamp_dates() {
    let body = json!({
        "historical_data": [
            {"date": "2024-04-01", "price": 100.0},
            {"date": "2024-04-02T00:00:00", "price": 102.0},
            {"date": "2024-04-03T00:00:00Z", "price": 101.0}
        ],
        "predicted_data": [103.0],
        "accuracy": 0.93
    });
    let resp: PredictionResponse = serde_json::from_value(body).unwrap();
    assert_eq!(
        resp.historical_data,
        vec![
            HistoricalPoint::new(d("2024-04-01"), 100.0),
            HistoricalPoint::new(d("2024-04-02"), 102.0),
            HistoricalPoint::new(d("2024-04-03"), 101.0),
        ]
    );
    assert!(!resp.is_error());
}

#[test]
fn error_only_body_is_a_failed_response() {
    let resp: PredictionResponse =
        serde_json::from_value(json!({"error": "unknown symbol"})).unwrap();
    assert_eq!(resp.error(), Some("unknown symbol"));
    assert!(resp.historical_data.is_empty());
}

#[test]
fn chart_absent_values_serialize_as_null() {
    let mut chart = ChartSeries::default();
    chart.push(d("2024-04-01"), Some(100.0), None);
    chart.push(d("2024-04-02"), None, Some(101.5));
    let v = serde_json::to_value(&chart).unwrap();
    assert_eq!(
        v,
        json!({
            "dates": ["2024-04-01", "2024-04-02"],
            "actual": [100.0, null],
            "predicted": [null, 101.5]
        })
    );
}
