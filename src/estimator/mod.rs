pub mod constants;
pub mod engine;
pub mod rounding;

pub use constants::*;
pub use engine::{beer_line, coke_line, estimate, liquor_line, participants, weed_line};
pub use rounding::{round2, round_half_up};
