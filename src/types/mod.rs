pub mod chart;
pub mod metrics;
pub mod price;
pub mod signal;

pub use chart::*;
pub use metrics::*;
pub use price::*;
pub use signal::*;
