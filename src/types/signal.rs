use serde::{Deserialize, Serialize};

/// Discrete signal band for a single acceleration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Not enough history to compute acceleration yet.
    Waiting,
    StrongBuy,
    Buy,
    Caution,
    Trim,
}

impl SignalKind {
    /// Classify an optional acceleration value.
    ///
    /// Checked top-to-bottom, first match wins. The boundaries are exact:
    /// 5.0 is a StrongBuy, -5.0 is a Trim, and 0.0 routes to Caution.
    pub fn from_acceleration(acceleration: Option<f64>) -> Self {
        match acceleration {
            None => SignalKind::Waiting,
            Some(a) if a >= 5.0 => SignalKind::StrongBuy,
            Some(a) if a > 0.0 => SignalKind::Buy,
            Some(a) if a <= -5.0 => SignalKind::Trim,
            Some(_) => SignalKind::Caution,
        }
    }

    /// Get display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Waiting => "Waiting for data",
            SignalKind::StrongBuy => "Strong Buy",
            SignalKind::Buy => "Buy",
            SignalKind::Caution => "Caution",
            SignalKind::Trim => "Trim",
        }
    }
}

/// A classification result. Recomputed on demand, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub label: String,
}

impl Signal {
    /// Classify an optional acceleration value into a signal.
    pub fn from_acceleration(acceleration: Option<f64>) -> Self {
        let kind = SignalKind::from_acceleration(acceleration);
        Self {
            kind,
            label: kind.label().to_string(),
        }
    }
}
