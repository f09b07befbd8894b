//! Grid side-length validation.
//!
//! Slider values, reload requests and the `--resolution` flag all arrive as
//! text. Anything that is not a number falls back to
//! [`DEFAULT_RESOLUTION`]; numbers are clamped into
//! [`MIN_RESOLUTION`]..=[`MAX_RESOLUTION`].

use std::fmt;

use thiserror::Error;

pub const DEFAULT_RESOLUTION: u32 = 16;
pub const MIN_RESOLUTION: u32 = 1;
pub const MAX_RESOLUTION: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

/// Parse text the way a browser `Number()` conversion does: surrounding
/// whitespace is ignored, empty text is 0, `0x`/`0o`/`0b` prefixes select a
/// radix and `Infinity` is the only spelling of infinity.
pub fn parse_resolution(input: &str) -> Result<f64, ResolutionError> {
    let trimmed = input.trim();
    let not_a_number = || ResolutionError::NotANumber(trimmed.to_string());

    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value.ok_or_else(not_a_number);
    }

    // f64::from_str also takes "inf", "nan" and friends in any case
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return Err(not_a_number());
    }

    trimmed.parse::<f64>().map_err(|_| not_a_number())
}

/// `Some(None)` for a radix prefix followed by bad digits; unsigned only
fn parse_prefixed_integer(text: &str) -> Option<Option<f64>> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }

    // folded into f64 so oversized literals still clamp instead of failing
    Some(digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    }))
}

/// Validate raw text into a side length in [1, 100], or 16 if it is not a
/// number. Fractional values pass through unchanged.
pub fn validate(input: &str) -> f64 {
    match parse_resolution(input) {
        Ok(value) => validate_number(value),
        Err(err) => {
            log::debug!("{err}, using default resolution {DEFAULT_RESOLUTION}");
            DEFAULT_RESOLUTION as f64
        }
    }
}

/// Clamp an already numeric side length.
///
/// The bounds are checked against the signed input, so every negative value
/// lands on the lower bound rather than on its absolute value.
pub fn validate_number(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_RESOLUTION as f64;
    }

    let magnitude = value.abs();
    if value > MAX_RESOLUTION as f64 {
        return MAX_RESOLUTION as f64;
    }
    if value < MIN_RESOLUTION as f64 {
        return MIN_RESOLUTION as f64;
    }

    magnitude
}

/// Integer grid side length, always within bounds
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(u32);

impl Resolution {
    /// Clamp an integer side length into bounds
    pub fn new(side: u32) -> Self {
        Self(side.clamp(MIN_RESOLUTION, MAX_RESOLUTION))
    }

    /// Validate text and drop any fractional part
    pub fn from_input(input: &str) -> Self {
        Self::new(validate(input).trunc() as u32)
    }

    pub fn side(self) -> u32 {
        self.0
    }

    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(DEFAULT_RESOLUTION)
    }
}

/// Readout text shown next to the slider, e.g. `16 x 16`
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0} x {0}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_above_maximum() {
        assert_eq!(validate("150"), 100.0);
        assert_eq!(validate("100"), 100.0);
        assert_eq!(validate("Infinity"), 100.0);
        assert_eq!(validate("+Infinity"), 100.0);
        assert_eq!(validate("-Infinity"), 1.0);
    }

    #[test]
    fn only_capitalized_infinity_counts_as_infinite() {
        for input in ["inf", "INFINITY", "infinity", "+inf", "nan", "NaN", "-NaN"] {
            assert!(parse_resolution(input).is_err(), "{input}");
            assert_eq!(validate(input), 16.0, "{input}");
        }
    }

    #[test]
    fn radix_prefixes_are_accepted() {
        assert_eq!(validate("0x20"), 32.0);
        assert_eq!(validate("0X1f"), 31.0);
        assert_eq!(validate("0o17"), 15.0);
        assert_eq!(validate("0b101"), 5.0);
        assert_eq!(validate("0xffffffffffffffffffff"), 100.0);
    }

    #[test]
    fn malformed_radix_literals_are_not_numbers() {
        for input in ["0x", "0xg1", "0b102", "-0x10", "+0x10", "0x1.5"] {
            assert_eq!(validate(input), 16.0, "{input}");
        }
    }

    #[test]
    fn exponent_notation_still_parses() {
        assert_eq!(validate("2e1"), 20.0);
        assert_eq!(validate("1E3"), 100.0);
        assert_eq!(validate(".5e2"), 50.0);
    }

    #[test]
    fn negative_values_hit_lower_bound() {
        assert_eq!(validate("-5"), 1.0);
        assert_eq!(validate("-500"), 1.0);
        assert_eq!(validate("0"), 1.0);
        assert_eq!(validate("0.5"), 1.0);
    }

    #[test]
    fn non_numbers_fall_back_to_default() {
        assert_eq!(validate("abc"), 16.0);
        assert_eq!(validate("12px"), 16.0);
        assert_eq!(validate("NaN"), 16.0);
        assert_eq!(validate_number(f64::NAN), 16.0);
    }

    #[test]
    fn in_range_values_pass_through() {
        assert_eq!(validate("16"), 16.0);
        assert_eq!(validate(" 42 "), 42.0);
        assert_eq!(validate("1"), 1.0);
        assert_eq!(validate("12.5"), 12.5);
    }

    #[test]
    fn empty_text_counts_as_zero() {
        assert_eq!(parse_resolution(""), Ok(0.0));
        assert_eq!(validate("   "), 1.0);
    }

    #[test]
    fn result_always_in_bounds_or_default() {
        let inputs = ["-1e9", "-1", "0", "1", "7.9", "99.99", "100.01", "1e300", "x", "--3"];
        for input in inputs {
            let v = validate(input);
            assert!((1.0..=100.0).contains(&v), "{input} -> {v}");
        }
    }

    #[test]
    fn resolution_truncates_fraction() {
        assert_eq!(Resolution::from_input("12.9").side(), 12);
        assert_eq!(Resolution::from_input("abc").side(), 16);
        assert_eq!(Resolution::from_input("150").cell_count(), 10_000);
        assert_eq!(Resolution::new(0).side(), 1);
    }

    #[test]
    fn readout_text() {
        assert_eq!(Resolution::new(16).to_string(), "16 x 16");
    }
}
