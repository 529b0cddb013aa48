pub mod engine;
pub mod level;

pub use engine::{assess, classify_level, compute_exposure, Score};
pub use level::RiskLevel;
