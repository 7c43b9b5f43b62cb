use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single raw observation from the data retrieval collaborator.
///
/// Order-irrelevant and possibly duplicated; the normalizer owns ordering,
/// deduplication, and windowing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: NaiveDate,
    pub adjusted_close: f64,
}

impl RawObservation {
    pub fn new(date: NaiveDate, adjusted_close: f64) -> Self {
        Self {
            date,
            adjusted_close,
        }
    }
}

/// One normalized historical observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date (exchange-local), unique per series, ordering key.
    pub date: NaiveDate,
    /// Short human-readable rendering of `date`; derived, not authoritative.
    pub label: String,
    /// Adjusted close. Always positive and finite after normalization.
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            label: month_label(date),
            price,
        }
    }
}

/// Render a date as a short month label, e.g. "Jan 24".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}
