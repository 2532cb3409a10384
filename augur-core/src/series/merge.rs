use chrono::{Days, NaiveDate};

use crate::{ChartSeries, MergeError, PredictionResponse};

/// Merge a prediction response into one chart-ready series anchored at `start_date`.
///
/// - Every historical point but the last keeps its own date, with its price in
///   `actual` and nothing in `predicted`.
/// - The last historical point is placed on `start_date` and its price goes
///   into both `actual` and `predicted`, so the two lines share one point.
///   Its stored date is not used.
/// - Predicted value `i` (0-based) is placed on `start_date + (i + 1)` days
///   with nothing in `actual`.
///
/// The output has `historical_data.len() + predicted_data.len()` rows. Prices
/// and accuracy are not range-checked. The input is not modified.
///
/// # Errors
/// Returns `MergeError::NoData` if the response carries an error or has no
/// historical points.
pub fn merge_series(
    response: &PredictionResponse,
    start_date: NaiveDate,
) -> Result<ChartSeries, MergeError> {
    if response.is_error() {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = ?response.error(), "prediction response carries an error; nothing to chart");
        return Err(MergeError::NoData);
    }
    let Some((anchor, history)) = response.historical_data.split_last() else {
        #[cfg(feature = "tracing")]
        tracing::debug!("prediction response has no historical data; nothing to chart");
        return Err(MergeError::NoData);
    };

    let mut out =
        ChartSeries::with_capacity(response.historical_data.len() + response.predicted_data.len());
    for point in history {
        out.push(point.date, Some(point.price), None);
    }
    out.push(start_date, Some(anchor.price), Some(anchor.price));
    for (i, value) in response.predicted_data.iter().enumerate() {
        out.push(prediction_date(start_date, i), None, Some(*value));
    }
    Ok(out)
}

/// Chart date of predicted value `index` for a series anchored at `start_date`.
///
/// Index 0 is the day after the anchor, so no predicted row shares the
/// anchor's date (a start of 2024-04-10 puts the first prediction on
/// 2024-04-11). Saturates at `NaiveDate::MAX`.
#[must_use]
pub fn prediction_date(start_date: NaiveDate, index: usize) -> NaiveDate {
    u64::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(1))
        .and_then(|offset| start_date.checked_add_days(Days::new(offset)))
        .unwrap_or(NaiveDate::MAX)
}
