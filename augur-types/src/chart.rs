//! Chart-ready, date-indexed series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Historical and predicted prices aligned on one date axis.
///
/// `dates`, `actual` and `predicted` always have the same length. Historical
/// rows carry `actual` only, predicted rows carry `predicted` only, and the
/// anchor row (the last historical one) carries both so the two lines meet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    /// X axis.
    pub dates: Vec<NaiveDate>,
    /// Observed prices; `None` on predicted rows.
    pub actual: Vec<Option<f64>>,
    /// Predicted prices; `None` on historical rows except the anchor.
    pub predicted: Vec<Option<f64>>,
}

/// One row of a [`ChartSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// X coordinate.
    pub date: NaiveDate,
    /// Observed price at `date`.
    pub actual: Option<f64>,
    /// Predicted price at `date`.
    pub predicted: Option<f64>,
}

impl ChartSeries {
    /// Empty series with room for `capacity` rows.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dates: Vec::with_capacity(capacity),
            actual: Vec::with_capacity(capacity),
            predicted: Vec::with_capacity(capacity),
        }
    }

    /// Append one row, keeping the three columns aligned.
    pub fn push(&mut self, date: NaiveDate, actual: Option<f64>, predicted: Option<f64>) {
        self.dates.push(date);
        self.actual.push(actual);
        self.predicted.push(predicted);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Row view over the three columns.
    pub fn points(&self) -> impl Iterator<Item = ChartPoint> + '_ {
        self.dates
            .iter()
            .zip(&self.actual)
            .zip(&self.predicted)
            .map(|((date, actual), predicted)| ChartPoint {
                date: *date,
                actual: *actual,
                predicted: *predicted,
            })
    }

    /// Index of the row where the actual and predicted lines meet.
    #[must_use]
    pub fn anchor_index(&self) -> Option<usize> {
        self.actual
            .iter()
            .zip(&self.predicted)
            .position(|(a, p)| a.is_some() && p.is_some())
    }
}
