use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::SupplyError;
use crate::estimator::constants::{CHILL_PRESET, FULLSEND_PRESET, PREGAME_PRESET};

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Per-person consumption rates for one vibe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibePreset {
    /// Twelve-ounce beers per beer drinker.
    pub beer_per: f64,
    /// Standard drinks per liquor drinker.
    pub drinks_per: f64,
    /// Grams of za per user.
    pub weed_per: f64,
    /// Grams of bag per user.
    pub coke_per: f64,
}

/// Intensity preset selecting the consumption rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    #[default]
    Chill,
    Pregame,
    FullSend,
}

impl Vibe {
    /// Every vibe, least to most intense.
    pub const ALL: [Vibe; 3] = [Vibe::Chill, Vibe::Pregame, Vibe::FullSend];

    /// Lookup key, as accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Vibe::Chill => "chill",
            Vibe::Pregame => "pregame",
            Vibe::FullSend => "fullsend",
        }
    }

    /// Label shown in the vibe picker.
    pub fn label(self) -> &'static str {
        match self {
            Vibe::Chill => "Chill (low)",
            Vibe::Pregame => "Pregame (medium)",
            Vibe::FullSend => "Full send (high)",
        }
    }

    pub fn preset(self) -> VibePreset {
        match self {
            Vibe::Chill => CHILL_PRESET,
            Vibe::Pregame => PREGAME_PRESET,
            Vibe::FullSend => FULLSEND_PRESET,
        }
    }

    /// Key with a space inserted before every uppercase letter.
    pub fn display_name(self) -> String {
        spaced_display(self.key())
    }

    /// Closest known key to `input`, if any is close enough.
    pub fn suggest(input: &str) -> Option<Vibe> {
        let input = input.trim().to_lowercase();
        Vibe::ALL
            .into_iter()
            .map(|v| (v, jaro_winkler(v.key(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(v, _)| v)
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Vibe {
    type Err = SupplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if let Some(vibe) = Vibe::ALL.into_iter().find(|v| v.key() == wanted) {
            return Ok(vibe);
        }

        match Vibe::suggest(s) {
            Some(suggestion) => Err(SupplyError::UnknownVibeSuggestion {
                input: s.to_string(),
                suggestion: suggestion.key().to_string(),
            }),
            None => Err(SupplyError::UnknownVibe(s.to_string())),
        }
    }
}

/// Insert a space before each ASCII uppercase letter (`fullSend` -> `full Send`).
pub fn spaced_display(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!("chill".parse::<Vibe>().unwrap(), Vibe::Chill);
        assert_eq!("Pregame".parse::<Vibe>().unwrap(), Vibe::Pregame);
        assert_eq!(" fullsend ".parse::<Vibe>().unwrap(), Vibe::FullSend);
    }

    #[test]
    fn test_parse_unknown_suggests() {
        let err = "fulsend".parse::<Vibe>().unwrap_err();
        match err {
            SupplyError::UnknownVibeSuggestion { suggestion, .. } => {
                assert_eq!(suggestion, "fullsend")
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            "zzzz".parse::<Vibe>(),
            Err(SupplyError::UnknownVibe(_))
        ));
    }

    #[test]
    fn test_spaced_display() {
        assert_eq!(spaced_display("fullsend"), "fullsend");
        assert_eq!(spaced_display("fullSend"), "full Send");
        assert_eq!(spaced_display("Chill"), " Chill");
        assert_eq!(Vibe::FullSend.display_name(), "fullsend");
    }

    #[test]
    fn test_presets_strictly_increase() {
        for pair in Vibe::ALL.windows(2) {
            let (lo, hi) = (pair[0].preset(), pair[1].preset());
            assert!(hi.beer_per > lo.beer_per);
            assert!(hi.drinks_per > lo.drinks_per);
            assert!(hi.weed_per > lo.weed_per);
            assert!(hi.coke_per > lo.coke_per);
        }
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Vibe::FullSend).unwrap();
        assert_eq!(json, "\"fullsend\"");
    }
}
