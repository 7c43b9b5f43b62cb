//! Analysis orchestration: normalize, derive, classify.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::services::{momentum, normalizer};
use crate::types::{MetricPoint, RawObservation, Signal};

/// Complete analysis of one instrument's price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Derived series, same order and length as the normalized input.
    pub series: Vec<MetricPoint>,
    /// The most recent metric point.
    pub latest: MetricPoint,
    /// Classification of the latest acceleration.
    pub signal: Signal,
}

/// Analyze raw observations with the default window and lookback.
pub fn analyze(observations: &[RawObservation]) -> Result<Analysis> {
    analyze_with(observations, &AnalysisConfig::default())
}

/// Analyze raw observations with an explicit configuration.
///
/// A series shorter than `lookback + 2` is valid but uninformative: every
/// derivative is absent and the signal is Waiting. Zero observations is an
/// outright `InsufficientData` error from the normalizer.
pub fn analyze_with(observations: &[RawObservation], config: &AnalysisConfig) -> Result<Analysis> {
    let series = normalizer::normalize(observations, config.window)?;
    let metrics = momentum::derive(&series, config.lookback)?;

    let latest = metrics
        .last()
        .cloned()
        .ok_or_else(|| AnalysisError::InsufficientData("empty derived series".to_string()))?;
    let signal = Signal::from_acceleration(latest.acceleration);

    info!(
        points = metrics.len(),
        latest = %latest.label,
        signal = %signal.label,
        "analysis complete"
    );

    Ok(Analysis {
        series: metrics,
        latest,
        signal,
    })
}
