use serde::Serialize;
use std::fmt;

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const ORANGE: Rgb = Rgb::new(255, 128, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

/// A colour together with its opacity in `[0, 1]`.
#[derive(Serialize, PartialEq, Debug, Clone, Copy)]
pub struct Paint {
    pub color: Rgb,
    pub opacity: f64,
}

/// Parse a `RRGGBB` hex string, optionally prefixed with `#`.
///
/// Surrounding whitespace is ignored and case does not matter. Anything
/// other than exactly six hex digits yields `None`.
///
/// # Example
///
/// ```
/// use geojson_overlays::color::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#ff8800"), Some(Rgb::new(255, 136, 0)));
/// assert_eq!(parse_hex("12345"), None);
/// ```
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let trimmed = hex.trim().to_uppercase();
    let digits = trimmed.strip_prefix('#').unwrap_or(&trimmed);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(Rgb {
        r: ((value & 0xFF_00_00) >> 16) as u8,
        g: ((value & 0x00_FF_00) >> 8) as u8,
        b: (value & 0x00_00_FF) as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_optional() {
        let expected = Some(Rgb::new(255, 136, 0));
        assert_eq!(parse_hex("#FF8800"), expected);
        assert_eq!(parse_hex("FF8800"), expected);
        assert_eq!(parse_hex(" ff8800\n"), expected);
    }

    #[test]
    fn wrong_length_is_no_color() {
        assert_eq!(parse_hex("12345"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#"), None);
        assert_eq!(parse_hex("#FF88001"), None);
    }

    #[test]
    fn non_hex_digits_are_no_color() {
        assert_eq!(parse_hex("GG0000"), None);
        assert_eq!(parse_hex("+FFFFF"), None);
        assert_eq!(parse_hex("##FF880"), None);
        assert_eq!(parse_hex("ÄÖÜ"), None);
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Rgb::ORANGE.to_string(), "#FF8000");
        let json = serde_json::to_string(&Rgb::new(1, 2, 171)).unwrap();
        assert_eq!(json, r##""#0102AB""##);
    }
}
