use serde::{Deserialize, Serialize};

/// A single canvas-space coordinate. Transient: only meaningful for the
/// canvas geometry it was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Value domain of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

/// Result of projecting a value series onto a canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub points: Vec<PlotPoint>,
    /// Canvas y for the value 0, when a zero line was requested. May fall
    /// outside the padded area; the caller clips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_y: Option<f64>,
    pub domain: Domain,
}

/// Above/below-zero banding for bar coloring.
///
/// Driven purely by the sign of the value. This is independent of the
/// signal classifier: an acceleration of -2 is `Below` here but classifies
/// as Caution, not Trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarDirection {
    Above,
    Below,
}

impl BarDirection {
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            BarDirection::Above
        } else {
            BarDirection::Below
        }
    }
}
