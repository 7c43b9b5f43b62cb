use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PricePoint;

/// A price point augmented with derived rate-of-change values.
///
/// `velocity` is the first-order ROC over the lookback window, in percent.
/// `acceleration` is the period-over-period change in velocity, in
/// percentage points. Both are `None` while the series is warming up:
/// absent means structurally undefined, never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    pub date: NaiveDate,
    pub label: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<f64>,
}

impl MetricPoint {
    /// Build a metric point from its source price point.
    ///
    /// Invariant: `acceleration` must not be `Some` when `velocity` is
    /// `None`; the derivative engine guarantees this by construction.
    pub fn new(point: &PricePoint, velocity: Option<f64>, acceleration: Option<f64>) -> Self {
        debug_assert!(
            !(velocity.is_none() && acceleration.is_some()),
            "acceleration requires velocity"
        );
        Self {
            date: point.date,
            label: point.label.clone(),
            price: point.price,
            velocity,
            acceleration,
        }
    }
}
