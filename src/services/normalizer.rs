//! Series normalization: ordering, deduplication, and windowing of raw
//! observations into the canonical price series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::types::{PricePoint, RawObservation};

/// Order raw observations chronologically and truncate to the most recent
/// `window` points.
///
/// Duplicate dates resolve last-write-wins: the later entry in input order
/// replaces the earlier one (repeated or corrected entries are expected
/// from the retrieval collaborator). Zero observations is an error; fewer
/// than `window` observations returns all available points.
pub fn normalize(observations: &[RawObservation], window: usize) -> Result<Vec<PricePoint>> {
    if observations.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "no observations provided".to_string(),
        ));
    }

    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for obs in observations {
        by_date.insert(obs.date, obs.adjusted_close);
    }

    let deduped = observations.len() - by_date.len();
    if deduped > 0 {
        debug!(replaced = deduped, "resolved duplicate dates last-write-wins");
    }

    let skip = by_date.len().saturating_sub(window);
    let mut series = Vec::with_capacity(by_date.len() - skip);
    for (date, price) in by_date.into_iter().skip(skip) {
        if !price.is_finite() || price <= 0.0 {
            return Err(AnalysisError::DataIntegrity(format!(
                "non-positive or non-finite price {} at {}",
                price, date
            )));
        }
        series.push(PricePoint::new(date, price));
    }

    debug!(points = series.len(), "normalized price series");
    Ok(series)
}
