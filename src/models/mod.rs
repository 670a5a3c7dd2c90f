pub mod estimate;
pub mod input;
pub mod vibe;

pub use estimate::{BeerLine, BreakdownRow, CokeLine, EstimationResult, LiquorLine, WeedLine};
pub use input::{clamp_headcount, clamp_percent, parse_headcount, parse_percent, EstimationInput};
pub use vibe::{spaced_display, Vibe, VibePreset};
