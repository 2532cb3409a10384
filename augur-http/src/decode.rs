//! Decoding of prediction service response bodies.

use augur_core::{GatewayError, HistoricalPoint, PredictionResponse};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct WireBody {
    historical_data: Option<Vec<HistoricalPoint>>,
    predicted_data: Option<Vec<PredictedValue>>,
    accuracy: Option<f64>,
    error: Option<Value>,
}

/// Model output arrives either flat (`[103.0, ...]`) or one value per row (`[[103.0], ...]`).
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictedValue {
    Scalar(f64),
    Row(Vec<f64>),
}

/// Decode a response body into a `PredictionResponse`.
///
/// The service may wrap its JSON document in a JSON string; such a body is
/// decoded a second time. A body with a non-null `error` is a valid domain
/// response even when the other fields are missing. Any other body must carry
/// `historical_data`, `predicted_data` and `accuracy`.
///
/// # Errors
/// Returns `GatewayError::BadResponse` if the body is not JSON, is not an
/// object after unwrapping, lacks a required field, or has a `predicted_data`
/// row that does not hold exactly one value.
pub fn decode_body(body: &str) -> Result<PredictionResponse, GatewayError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::bad_response(format!("body is not JSON: {e}")))?;
    let value = match value {
        Value::String(inner) => serde_json::from_str(&inner).map_err(|e| {
            GatewayError::bad_response(format!("string body does not hold JSON: {e}"))
        })?,
        other => other,
    };
    if !value.is_object() {
        return Err(GatewayError::bad_response(format!(
            "expected a JSON object, got {}",
            kind_of(&value)
        )));
    }
    let wire: WireBody = serde_json::from_value(value)
        .map_err(|e| GatewayError::bad_response(format!("unexpected body shape: {e}")))?;

    let historical_data = wire.historical_data;

    if let Some(err) = wire.error {
        let message = match err {
            Value::String(s) => s,
            other => other.to_string(),
        };
        return Ok(PredictionResponse {
            historical_data: historical_data.unwrap_or_default(),
            predicted_data: wire
                .predicted_data
                .and_then(|v| flatten(v).ok())
                .unwrap_or_default(),
            accuracy: wire.accuracy.unwrap_or_default(),
            error: Some(message),
        });
    }

    Ok(PredictionResponse::new(
        historical_data.ok_or_else(|| missing("historical_data"))?,
        flatten(wire.predicted_data.ok_or_else(|| missing("predicted_data"))?)?,
        wire.accuracy.ok_or_else(|| missing("accuracy"))?,
    ))
}

/// One value per future day; a row must hold exactly one value.
fn flatten(values: Vec<PredictedValue>) -> Result<Vec<f64>, GatewayError> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            PredictedValue::Scalar(x) => Ok(x),
            PredictedValue::Row(row) => match row.as_slice() {
                [x] => Ok(*x),
                _ => Err(GatewayError::bad_response(format!(
                    "predicted_data[{i}] has {} values, expected 1",
                    row.len()
                ))),
            },
        })
        .collect()
}

fn missing(field: &str) -> GatewayError {
    GatewayError::bad_response(format!("missing field `{field}`"))
}

const fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
