use crate::models::VibePreset;

// ─────────────────────────────────────────────────────────────────────────────
// Vibe presets (per-person consumption rates)
// ─────────────────────────────────────────────────────────────────────────────

/// Low intensity.
pub const CHILL_PRESET: VibePreset = VibePreset {
    beer_per: 2.0,
    drinks_per: 1.0,
    weed_per: 0.5,
    coke_per: 0.1,
};

/// Medium intensity.
pub const PREGAME_PRESET: VibePreset = VibePreset {
    beer_per: 3.0,
    drinks_per: 2.0,
    weed_per: 1.0,
    coke_per: 0.2,
};

/// High intensity.
pub const FULLSEND_PRESET: VibePreset = VibePreset {
    beer_per: 5.0,
    drinks_per: 3.0,
    weed_per: 2.0,
    coke_per: 0.5,
};

// ─────────────────────────────────────────────────────────────────────────────
// Packaging divisors
// ─────────────────────────────────────────────────────────────────────────────

/// Twelve-ounce servings per can.
pub const SERVINGS_PER_CAN: f64 = 1.0;

/// Twelve-ounce servings in a half-barrel keg.
pub const SERVINGS_PER_KEG: f64 = 165.0;

/// Standard shots in a 750 mL fifth.
pub const SHOTS_PER_FIFTH: f64 = 17.0;

/// Standard shots in a 1.75 L handle.
pub const SHOTS_PER_HANDLE: f64 = 39.0;

/// Grams per ounce.
pub const GRAMS_PER_OUNCE: f64 = 28.0;

/// Grams per eighth-ounce.
pub const GRAMS_PER_EIGHTH: f64 = 3.5;

// ─────────────────────────────────────────────────────────────────────────────
// Input defaults and bounds
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_HEADCOUNT: u32 = 25;
pub const MIN_HEADCOUNT: u32 = 1;

pub const DEFAULT_BEER_SHARE: f64 = 60.0;
pub const DEFAULT_LIQUOR_SHARE: f64 = 30.0;
pub const DEFAULT_WEED_SHARE: f64 = 25.0;
pub const DEFAULT_COKE_SHARE: f64 = 5.0;

pub const MIN_SHARE: f64 = 0.0;
pub const MAX_SHARE: f64 = 100.0;

/// Decimal places kept by [`round2`](super::rounding::round2).
pub const DISPLAY_DECIMALS: i32 = 2;
