use crate::estimator::constants::{
    DEFAULT_BEER_SHARE, DEFAULT_COKE_SHARE, DEFAULT_HEADCOUNT, DEFAULT_LIQUOR_SHARE,
    DEFAULT_WEED_SHARE, MAX_SHARE, MIN_HEADCOUNT, MIN_SHARE,
};
use crate::models::Vibe;

/// Parameters for one estimate.
///
/// Shares are independent percentages of the headcount; they need not sum to
/// 100 and a guest may count toward several categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationInput {
    pub headcount: u32,
    pub vibe: Vibe,
    pub beer_share: f64,
    pub liquor_share: f64,
    pub weed_share: f64,
    pub coke_share: f64,
}

impl Default for EstimationInput {
    fn default() -> Self {
        Self {
            headcount: DEFAULT_HEADCOUNT,
            vibe: Vibe::default(),
            beer_share: DEFAULT_BEER_SHARE,
            liquor_share: DEFAULT_LIQUOR_SHARE,
            weed_share: DEFAULT_WEED_SHARE,
            coke_share: DEFAULT_COKE_SHARE,
        }
    }
}

impl EstimationInput {
    /// Headcount floored to 1, shares clamped to [0, 100].
    pub fn normalized(&self) -> Self {
        Self {
            headcount: self.headcount.max(MIN_HEADCOUNT),
            vibe: self.vibe,
            beer_share: clamp_percent(self.beer_share),
            liquor_share: clamp_percent(self.liquor_share),
            weed_share: clamp_percent(self.weed_share),
            coke_share: clamp_percent(self.coke_share),
        }
    }
}

/// Clamp a percentage to [0, 100]; NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_SHARE;
    }
    value.clamp(MIN_SHARE, MAX_SHARE)
}

/// Parse a percentage from the leading number in `text` (`"50%"` -> 50).
///
/// Text without a leading number becomes 0.
pub fn parse_percent(text: &str) -> f64 {
    let value = leading_decimal(text)
        .and_then(|n| n.parse().ok())
        .unwrap_or(MIN_SHARE);
    clamp_percent(value)
}

/// Floor a signed headcount to at least 1.
pub fn clamp_headcount(value: i64) -> u32 {
    value.clamp(MIN_HEADCOUNT as i64, u32::MAX as i64) as u32
}

/// Parse a headcount from the leading integer in `text` (`"12.7"` -> 12).
///
/// Text without a leading integer, zero and negatives all become 1.
pub fn parse_headcount(text: &str) -> u32 {
    // Digits only, so the f64 is integral; `as` saturates past i64
    let value = leading_integer(text)
        .and_then(|n| n.parse::<f64>().ok())
        .map(|n| n as i64)
        .unwrap_or(MIN_HEADCOUNT as i64);
    clamp_headcount(value)
}

/// Byte length of an optional sign followed by ASCII digits; `None` without digits.
fn scan_signed_digits(bytes: &[u8]) -> Option<usize> {
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(sign + digits)
}

/// Leading `[+-]digits` of `text`, ignoring leading whitespace.
fn leading_integer(text: &str) -> Option<&str> {
    let text = text.trim_start();
    scan_signed_digits(text.as_bytes()).map(|end| &text[..end])
}

/// Leading `[+-]digits[.digits][e[+-]digits]` of `text`, ignoring leading whitespace.
///
/// Either side of the point may be empty but not both.
fn leading_decimal(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // An exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        if let Some(len) = scan_signed_digits(&bytes[end + 1..]) {
            end += 1 + len;
        }
    }

    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let input = EstimationInput::default();
        assert_eq!(input.headcount, 25);
        assert_eq!(input.vibe, Vibe::Chill);
        assert_eq!(input.beer_share, 60.0);
        assert_eq!(input.liquor_share, 30.0);
        assert_eq!(input.weed_share, 25.0);
        assert_eq!(input.coke_share, 5.0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-10.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent(" 33 "), 33.0);
        assert_eq!(parse_percent("abc"), 0.0);
        assert_eq!(parse_percent("250"), 100.0);
    }

    #[test]
    fn test_parse_percent_reads_leading_number() {
        assert_eq!(parse_percent("50%"), 50.0);
        assert_eq!(parse_percent("12.5 percent"), 12.5);
        assert_eq!(parse_percent(".5"), 0.5);
        assert_eq!(parse_percent("5."), 5.0);
        assert_eq!(parse_percent("1e1x"), 10.0);
        assert_eq!(parse_percent("7e"), 7.0);
        assert_eq!(parse_percent("-20"), 0.0);
        assert_eq!(parse_percent("."), 0.0);
        assert_eq!(parse_percent(""), 0.0);
    }

    #[test]
    fn test_parse_headcount_reads_leading_integer() {
        assert_eq!(parse_headcount("12.7"), 12);
        assert_eq!(parse_headcount("  30 guests"), 30);
        assert_eq!(parse_headcount("+8"), 8);
        assert_eq!(parse_headcount("-5"), 1);
        assert_eq!(parse_headcount("0"), 1);
        assert_eq!(parse_headcount("abc"), 1);
        assert_eq!(parse_headcount("99999999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_headcount_floor() {
        assert_eq!(clamp_headcount(-5), 1);
        assert_eq!(clamp_headcount(0), 1);
        assert_eq!(clamp_headcount(40), 40);
        assert_eq!(parse_headcount("nope"), 1);
        assert_eq!(parse_headcount("12"), 12);
    }

    #[test]
    fn test_normalized() {
        let raw = EstimationInput {
            headcount: 0,
            vibe: Vibe::Pregame,
            beer_share: 120.0,
            liquor_share: -3.0,
            weed_share: f64::NAN,
            coke_share: 7.0,
        };
        let n = raw.normalized();
        assert_eq!(n.headcount, 1);
        assert_eq!(n.beer_share, 100.0);
        assert_eq!(n.liquor_share, 0.0);
        assert_eq!(n.weed_share, 0.0);
        assert_eq!(n.coke_share, 7.0);
    }
}
