pub mod analysis;
pub mod momentum;
pub mod normalizer;
pub mod projection;

pub use analysis::{analyze, analyze_with, Analysis};
pub use momentum::{derive, velocity_at};
pub use normalizer::normalize;
pub use projection::project;
