//! Impulse - momentum acceleration analysis for monthly price series.
//!
//! Turns a raw, unordered monthly adjusted-close history into first- and
//! second-order rate-of-change series (velocity and acceleration),
//! classifies the latest acceleration into a discrete signal band, and
//! projects derived series onto normalized canvas coordinates for
//! rendering without a charting library.
//!
//! The pipeline is pure and synchronous: normalize -> derive -> classify,
//! with chart projection as an independent consumer of the same derived
//! series. Only the data retrieval collaborator in [`sources`] is async.

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used items
pub use config::AnalysisConfig;
pub use error::{AnalysisError, FetchError, Result};
pub use services::{analyze, analyze_with, project, Analysis};
pub use types::*;
