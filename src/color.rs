use hex::FromHex;
use std::fmt;

/// An RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fallback color used when a hex string cannot be parsed.
    pub const DEFAULT: Self = Self::new(0, 215, 135);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like "#FFC000" or "ffc000".
    ///
    /// Parsing is total: anything that is not exactly six hex digits
    /// (with an optional leading '#') yields [`Color::DEFAULT`].
    pub fn parse(input: &str) -> Self {
        let digits = input.strip_prefix('#').unwrap_or(input);
        match <[u8; 3]>::from_hex(digits) {
            Ok([r, g, b]) => Self::new(r, g, b),
            Err(_) => Self::DEFAULT,
        }
    }

    /// Blend every channel toward white by a percentage.
    pub fn lightened(self, percent: u8) -> Self {
        Self::new(
            lighten(self.r, percent),
            lighten(self.g, percent),
            lighten(self.b, percent),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        Self::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Blend a single channel toward white (255) by a percentage.
///
/// Callers are expected to pass a percentage in 0-100, but the result is
/// clamped to 255 no matter what comes in.
pub fn lighten(value: u8, percent: u8) -> u8 {
    let lit = u32::from(value) + (255 - u32::from(value)) * u32::from(percent) / 100;
    lit.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#00D787", Color::new(0, 215, 135))]
    #[case("00d787", Color::new(0, 215, 135))]
    #[case("#FFC000", Color::new(255, 192, 0))]
    #[case("", Color::DEFAULT)]
    #[case("#123", Color::DEFAULT)]
    #[case("#1234567", Color::DEFAULT)]
    #[case("#12G456", Color::DEFAULT)]
    #[case("not a color", Color::DEFAULT)]
    fn test_parse(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(Color::parse(input), expected);
    }

    #[rstest]
    #[case("#00D787")]
    #[case("#FFC000")]
    #[case("#0A0B0C")]
    fn test_format_roundtrip(#[case] input: &str) {
        assert_eq!(Color::parse(input).to_string(), input);
    }

    #[test]
    fn test_format_uppercases() {
        assert_eq!(Color::parse("ffc000").to_string(), "#FFC000");
    }

    #[test]
    fn test_lighten_endpoints() {
        assert_eq!(lighten(120, 0), 120);
        assert_eq!(lighten(120, 100), 255);
        assert_eq!(lighten(0, 100), 255);
        assert_eq!(lighten(255, 0), 255);
    }

    #[test]
    fn test_lighten_floors() {
        // 0 + 255 * 50 / 100 = 127.5, floored
        assert_eq!(lighten(0, 50), 127);
    }

    #[test]
    fn test_lighten_monotonic() {
        let mut previous = 0;
        for percent in 0..=100 {
            let lit = lighten(40, percent);
            assert!(lit >= previous, "lighten(40, {percent}) went backwards");
            previous = lit;
        }
    }

    #[test]
    fn test_lighten_clamps_wild_percent() {
        assert_eq!(lighten(10, 200), 255);
    }
}
