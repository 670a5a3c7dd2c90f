pub mod cli;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod logging;
pub mod models;

pub use error::{Result, SupplyError};
pub use estimator::estimate;
pub use models::{BreakdownRow, EstimationInput, EstimationResult, Vibe, VibePreset};
