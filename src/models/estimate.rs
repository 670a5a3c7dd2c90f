use serde::{Deserialize, Serialize};

use crate::models::Vibe;

/// One row of the Item / Quantity / Notes table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub item: String,
    pub quantity: String,
    pub notes: String,
}

impl BreakdownRow {
    pub fn new(item: impl Into<String>, quantity: String, notes: String) -> Self {
        Self {
            item: item.into(),
            quantity,
            notes,
        }
    }
}

/// Beer: twelve-ounce servings, cans and half-barrel kegs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerLine {
    pub drinkers: u32,
    pub per_person: f64,
    pub total_beers: f64,
    pub cans: u64,
    pub kegs: f64,
}

/// Liquor: standard shots, fifths and handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquorLine {
    pub drinkers: u32,
    pub per_person: f64,
    /// Unrounded; fifths and handles are derived from this.
    pub shots: f64,
    pub fifths: f64,
    pub handles: f64,
}

/// Za: grams and ounces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeedLine {
    pub users: u32,
    pub per_user: f64,
    pub total_grams: f64,
    pub ounces: f64,
}

/// Bag: grams and eighths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CokeLine {
    pub users: u32,
    pub per_user: f64,
    pub total_grams: f64,
    pub eighths: f64,
}

/// Full estimate for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub head: u32,
    pub vibe: Vibe,

    // Rounded top-line totals.
    pub total_beers: f64,
    pub shots: f64,
    pub weed_grams: f64,
    pub coke_grams: f64,

    pub beer: BeerLine,
    pub liquor: LiquorLine,
    pub weed: WeedLine,
    pub coke: CokeLine,

    /// Beer, kegs, liquor, za, bag.
    pub breakdown: Vec<BreakdownRow>,
}
