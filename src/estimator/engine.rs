use tracing::debug;

use crate::estimator::constants::*;
use crate::estimator::rounding::{round2, round_half_up, to_count};
use crate::models::{
    BeerLine, BreakdownRow, CokeLine, EstimationInput, EstimationResult, LiquorLine, WeedLine,
};

/// Number of guests taking part in one category.
///
/// Always within [0, headcount] for a share in [0, 100].
pub fn participants(headcount: u32, share_pct: f64) -> u32 {
    to_count(round_half_up(headcount as f64 * (share_pct / 100.0)))
}

/// Beer servings, cans and kegs.
pub fn beer_line(headcount: u32, share_pct: f64, per_person: f64) -> BeerLine {
    let drinkers = participants(headcount, share_pct);
    let total_beers = round2(drinkers as f64 * per_person);
    let cans = (total_beers / SERVINGS_PER_CAN).ceil() as u64;
    let kegs = round2(total_beers / SERVINGS_PER_KEG);

    BeerLine {
        drinkers,
        per_person,
        total_beers,
        cans,
        kegs,
    }
}

/// Liquor shots, fifths and handles. Shots are not rounded before packaging.
pub fn liquor_line(headcount: u32, share_pct: f64, per_person: f64) -> LiquorLine {
    let drinkers = participants(headcount, share_pct);
    let shots = drinkers as f64 * per_person;

    LiquorLine {
        drinkers,
        per_person,
        shots,
        fifths: round2(shots / SHOTS_PER_FIFTH),
        handles: round2(shots / SHOTS_PER_HANDLE),
    }
}

/// Za grams and ounces.
pub fn weed_line(headcount: u32, share_pct: f64, per_user: f64) -> WeedLine {
    let users = participants(headcount, share_pct);
    let total_grams = round2(users as f64 * per_user);

    WeedLine {
        users,
        per_user,
        total_grams,
        ounces: round2(total_grams / GRAMS_PER_OUNCE),
    }
}

/// Bag grams and eighths.
pub fn coke_line(headcount: u32, share_pct: f64, per_user: f64) -> CokeLine {
    let users = participants(headcount, share_pct);
    let total_grams = round2(users as f64 * per_user);

    CokeLine {
        users,
        per_user,
        total_grams,
        eighths: round2(total_grams / GRAMS_PER_EIGHTH),
    }
}

/// Estimate supplies for a party.
///
/// Total over every input: the headcount is floored to 1 and shares are
/// clamped to [0, 100] before any arithmetic.
pub fn estimate(input: &EstimationInput) -> EstimationResult {
    let input = input.normalized();
    let rates = input.vibe.preset();
    let head = input.headcount;

    debug!(
        head,
        vibe = %input.vibe,
        beer = input.beer_share,
        liquor = input.liquor_share,
        weed = input.weed_share,
        coke = input.coke_share,
        "estimating"
    );

    let beer = beer_line(head, input.beer_share, rates.beer_per);
    let liquor = liquor_line(head, input.liquor_share, rates.drinks_per);
    let weed = weed_line(head, input.weed_share, rates.weed_per);
    let coke = coke_line(head, input.coke_share, rates.coke_per);

    let breakdown = build_breakdown(&beer, &liquor, &weed, &coke);

    EstimationResult {
        head,
        vibe: input.vibe,
        total_beers: beer.total_beers,
        shots: round2(liquor.shots),
        weed_grams: weed.total_grams,
        coke_grams: coke.total_grams,
        beer,
        liquor,
        weed,
        coke,
        breakdown,
    }
}

/// Rows in display order: beer, kegs, booze, za, bag.
fn build_breakdown(
    beer: &BeerLine,
    liquor: &LiquorLine,
    weed: &WeedLine,
    coke: &CokeLine,
) -> Vec<BreakdownRow> {
    vec![
        BreakdownRow::new(
            "Beer (12 oz servings)",
            format!("{} beers ({} standard cans)", beer.total_beers, beer.cans),
            format!(
                "~{} beer drinkers, {} beers/person",
                beer.drinkers, beer.per_person
            ),
        ),
        BreakdownRow::new(
            "Kegs (half-barrel = ~165 cans)",
            format!("{} kegs", round2(beer.kegs)),
            format!("1 half-barrel ≈ {} 12-oz servings", SERVINGS_PER_KEG),
        ),
        BreakdownRow::new(
            "Booze (standard drinks/shots)",
            format!(
                "{} drinks → ~{} fifths or {} handles",
                round2(liquor.shots),
                liquor.fifths,
                liquor.handles
            ),
            format!(
                "{} booze drinkers, {} drinks/person",
                liquor.drinkers, liquor.per_person
            ),
        ),
        BreakdownRow::new(
            "Za",
            format!("{} g ≈ {} oz", weed.total_grams, weed.ounces),
            format!("{} users, {} g/user", weed.users, weed.per_user),
        ),
        BreakdownRow::new(
            "Bag",
            format!(
                "{} g ≈ {} x 1/8 oz (8-ball)",
                coke.total_grams, coke.eighths
            ),
            format!("{} users, {} g/user", coke.users, coke.per_user),
        ),
    ]
}
