//! Chart series utilities.
//!
//! - `merge`: align historical and predicted prices on one date axis
/// Merge of historical and predicted prices into a `ChartSeries`.
pub mod merge;
