//! Derivative engine: first- and second-order rate-of-change over a fixed
//! lookback window.

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::types::{MetricPoint, PricePoint};

/// First-order ROC at `index`, in percent, over `lookback` periods.
///
/// `None` while the series is warming up (`index < lookback`) or when the
/// baseline price is zero. Never returns NaN or infinity.
pub fn velocity_at(prices: &[f64], index: usize, lookback: usize) -> Option<f64> {
    if index < lookback || index >= prices.len() {
        return None;
    }
    let base = prices[index - lookback];
    if base == 0.0 {
        return None;
    }
    let velocity = (prices[index] - base) / base * 100.0;
    velocity.is_finite().then_some(velocity)
}

/// Compute velocity and acceleration for every point of an ordered,
/// positive-price series.
///
/// Produces a new series of the same length; the input is not mutated.
/// Acceleration at `i` is the velocity at `i` minus the velocity recomputed
/// from raw prices at `i - 1`, so it is defined only from index
/// `lookback + 1` onward.
pub fn derive(series: &[PricePoint], lookback: usize) -> Result<Vec<MetricPoint>> {
    check_preconditions(series)?;

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let metrics: Vec<MetricPoint> = series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let velocity = velocity_at(&prices, i, lookback);
            let previous = if i == 0 {
                None
            } else {
                velocity_at(&prices, i - 1, lookback)
            };
            let acceleration = match (velocity, previous) {
                (Some(v), Some(prev)) => Some(v - prev),
                _ => None,
            };
            MetricPoint::new(point, velocity, acceleration)
        })
        .collect();

    debug!(
        points = metrics.len(),
        defined = metrics.iter().filter(|m| m.acceleration.is_some()).count(),
        "derived momentum series"
    );
    Ok(metrics)
}

/// Fail fast if a caller bypassed the normalizer: the engine requires a
/// strictly ascending series of positive, finite prices.
fn check_preconditions(series: &[PricePoint]) -> Result<()> {
    for (i, point) in series.iter().enumerate() {
        if !point.price.is_finite() || point.price <= 0.0 {
            return Err(AnalysisError::PreconditionViolation(format!(
                "invalid price {} at {}",
                point.price, point.date
            )));
        }
        if i > 0 && series[i - 1].date >= point.date {
            return Err(AnalysisError::PreconditionViolation(format!(
                "series not strictly ascending at {}",
                point.date
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let date = NaiveDate::from_ymd_opt(2020, 1, 1)
                    .unwrap()
                    .checked_add_months(chrono::Months::new(i as u32))
                    .unwrap();
                PricePoint::new(date, price)
            })
            .collect()
    }

    #[test]
    fn test_short_series_all_absent() {
        let series = series_from(&[100.0, 101.0]);
        let metrics = derive(&series, 3).unwrap();
        assert_eq!(metrics.len(), 2);
        for m in &metrics {
            assert!(m.velocity.is_none());
            assert!(m.acceleration.is_none());
        }
    }

    #[test]
    fn test_warmup_boundaries() {
        let series = series_from(&[100.0, 102.0, 104.0, 106.0, 108.0, 110.0]);
        let metrics = derive(&series, 3).unwrap();

        // First `lookback` velocities and `lookback + 1` accelerations absent.
        for m in &metrics[..3] {
            assert!(m.velocity.is_none());
        }
        for m in &metrics[..4] {
            assert!(m.acceleration.is_none());
        }
        assert!(metrics[3].velocity.is_some());
        assert!(metrics[4].acceleration.is_some());
    }

    #[test]
    fn test_velocity_formula() {
        // (110 - 100) / 100 * 100 = 10.0 at index 4, baseline index 1.
        let series = series_from(&[100.0, 100.0, 100.0, 100.0, 110.0]);
        let metrics = derive(&series, 3).unwrap();
        assert_eq!(metrics[4].velocity, Some(10.0));
        // velocity[3] is defined here (index 3 >= lookback), value 0.
        assert_eq!(metrics[3].velocity, Some(0.0));
        assert_eq!(metrics[4].acceleration, Some(10.0));
    }

    #[test]
    fn test_lookback_plus_one_guard() {
        // Exactly lookback + 1 points: velocity defined at the last index
        // only, so acceleration is absent everywhere.
        let series = series_from(&[100.0, 100.0, 100.0, 110.0]);
        let metrics = derive(&series, 3).unwrap();
        assert_eq!(metrics[3].velocity, Some(10.0));
        assert!(metrics[3].acceleration.is_none());
    }

    #[test]
    fn test_recomputed_velocity_matches_stored_exactly() {
        let prices: Vec<f64> = (0..48).map(|i| 100.0 + (i as f64) * 1.7).collect();
        let series = series_from(&prices);
        let metrics = derive(&series, 3).unwrap();

        for i in 4..metrics.len() {
            let recomputed = velocity_at(&prices, i - 1, 3);
            // Exact equality: same formula, same operand order.
            assert_eq!(recomputed, metrics[i - 1].velocity);
            if let (Some(v), Some(prev)) = (metrics[i].velocity, recomputed) {
                assert_eq!(metrics[i].acceleration, Some(v - prev));
            }
        }
    }

    #[test]
    fn test_acceleration_defined_iff_both_velocities_defined() {
        let prices: Vec<f64> = (0..10).map(|i| 50.0 + i as f64).collect();
        let series = series_from(&prices);
        let metrics = derive(&series, 3).unwrap();

        for (i, m) in metrics.iter().enumerate() {
            let both = m.velocity.is_some() && i > 0 && metrics[i - 1].velocity.is_some();
            assert_eq!(m.acceleration.is_some(), both, "index {}", i);
        }
    }

    #[test]
    fn test_linear_growth_has_flat_acceleration() {
        // +1 per month over a full window: velocity settles, acceleration
        // stays near zero.
        let prices: Vec<f64> = (0..48).map(|i| 100.0 + i as f64).collect();
        let series = series_from(&prices);
        let metrics = derive(&series, 3).unwrap();

        for m in metrics.iter().skip(4) {
            let a = m.acceleration.unwrap();
            assert!(a.abs() < 0.05, "acceleration {} not flat", a);
        }
        // Velocity trends slightly down as the base grows, but stays positive.
        for m in metrics.iter().skip(3) {
            assert!(m.velocity.unwrap() > 0.0);
        }
    }

    #[test]
    fn test_deterministic_output() {
        let prices: Vec<f64> = (0..48).map(|i| 100.0 * (1.01_f64).powi(i)).collect();
        let series = series_from(&prices);
        let first = derive(&series, 3).unwrap();
        let second = derive(&series, 3).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.velocity, b.velocity);
            assert_eq!(a.acceleration, b.acceleration);
        }
    }

    #[test]
    fn test_no_nan_crosses_the_boundary() {
        let prices: Vec<f64> = (0..10).map(|i| 1e-8 + i as f64).collect();
        let series = series_from(&prices);
        let metrics = derive(&series, 3).unwrap();
        for m in &metrics {
            if let Some(v) = m.velocity {
                assert!(v.is_finite());
            }
            if let Some(a) = m.acceleration {
                assert!(a.is_finite());
            }
        }
    }

    #[test]
    fn test_unsorted_input_is_precondition_violation() {
        let mut series = series_from(&[100.0, 101.0, 102.0]);
        series.swap(0, 2);
        assert!(matches!(
            derive(&series, 3),
            Err(AnalysisError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_non_positive_price_is_precondition_violation() {
        let mut series = series_from(&[100.0, 101.0, 102.0]);
        series[1].price = 0.0;
        assert!(matches!(
            derive(&series, 3),
            Err(AnalysisError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_zero_baseline_yields_absent_not_infinity() {
        // The precondition check rejects zero prices, so exercise the
        // divisor guard directly.
        let prices = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert!(velocity_at(&prices, 3, 3).is_none());
        assert!(velocity_at(&prices, 4, 3).is_some());
    }
}
