use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or the short `#RGB` form (case-insensitive)
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(trimmed.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::BadDigit(trimmed.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorParseError::BadLength(trimmed.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Subtract `step` from every channel, stopping at 0
    pub fn darkened(self, step: u8) -> Self {
        Self {
            r: self.r.saturating_sub(step),
            g: self.g.saturating_sub(step),
            b: self.b.saturating_sub(step),
        }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }

    /// Perceived brightness, used to pick readable label text on a swatch
    pub fn is_light(self) -> bool {
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        luma > 128_000
    }
}

/// Formats like a computed CSS color: `rgb(76, 171, 230)`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

pub const DEFAULT_PIXEL_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const DEFAULT_BRUSH_COLOR: Rgb = Rgb::new(0x4C, 0xAB, 0xE6);

pub const PICKER_ROWS: usize = 4;
pub const PICKER_COLS: usize = 8;

/// Swatches offered by the color picker window
pub const PICKER_SWATCHES: [[Rgb; PICKER_COLS]; PICKER_ROWS] = [
    [
        Rgb::new(0, 0, 0),       // black
        Rgb::new(64, 64, 64),    // charcoal
        Rgb::new(128, 128, 128), // gray
        Rgb::new(192, 192, 192), // silver
        Rgb::new(255, 255, 255), // white
        Rgb::new(76, 171, 230),  // sky blue
        Rgb::new(47, 50, 167),   // indigo
        Rgb::new(33, 30, 89),    // dark purple-blue
    ],
    [
        Rgb::new(255, 0, 0),     // red
        Rgb::new(188, 63, 63),   // dark red
        Rgb::new(120, 0, 0),     // maroon
        Rgb::new(255, 119, 119), // pink
        Rgb::new(255, 188, 188), // light pink
        Rgb::new(255, 0, 255),   // magenta
        Rgb::new(139, 0, 139),   // dark magenta
        Rgb::new(69, 40, 60),    // plum
    ],
    [
        Rgb::new(255, 165, 0),   // orange
        Rgb::new(223, 113, 38),  // burnt orange
        Rgb::new(143, 86, 59),   // tan
        Rgb::new(102, 57, 49),   // brown
        Rgb::new(238, 195, 154), // peach
        Rgb::new(251, 242, 54),  // yellow
        Rgb::new(240, 230, 140), // khaki
        Rgb::new(128, 128, 0),   // olive
    ],
    [
        Rgb::new(0, 255, 0),     // lime
        Rgb::new(106, 190, 48),  // green
        Rgb::new(34, 139, 34),   // forest green
        Rgb::new(15, 56, 15),    // dark green
        Rgb::new(55, 148, 110),  // teal-green
        Rgb::new(0, 255, 255),   // cyan
        Rgb::new(0, 128, 128),   // teal
        Rgb::new(50, 60, 57),    // dark teal
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        assert_eq!(Rgb::from_hex("#4CABE6"), Ok(DEFAULT_BRUSH_COLOR));
        assert_eq!(Rgb::from_hex("#4cabe6"), Ok(DEFAULT_BRUSH_COLOR));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Rgb::from_hex("#fff"), Ok(DEFAULT_PIXEL_COLOR));
        assert_eq!(Rgb::from_hex("#1a0"), Ok(Rgb::new(0x11, 0xaa, 0x00)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(Rgb::from_hex("4CABE6"), Err(ColorParseError::MissingHash(_))));
        assert!(matches!(Rgb::from_hex("#4CAB"), Err(ColorParseError::BadLength(_))));
        assert!(matches!(Rgb::from_hex("#4CABEZ"), Err(ColorParseError::BadDigit(_))));
        // multi-byte input must not panic on slicing
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn displays_as_css_rgb() {
        assert_eq!(DEFAULT_BRUSH_COLOR.to_string(), "rgb(76, 171, 230)");
        assert_eq!(DEFAULT_BRUSH_COLOR.to_hex(), "#4cabe6");
    }

    #[test]
    fn darkened_saturates_at_zero() {
        assert_eq!(Rgb::new(255, 20, 10).darkened(15), Rgb::new(240, 5, 0));
        assert_eq!(Rgb::new(0, 0, 0).darkened(15), Rgb::new(0, 0, 0));
    }

    #[test]
    fn lightness_check() {
        assert!(DEFAULT_PIXEL_COLOR.is_light());
        assert!(!Rgb::new(0, 0, 0).is_light());
    }
}
