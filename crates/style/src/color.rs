use crate::error::StyleError;
use crate::property::Style;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `color` style property holding any CSS color expression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    value: String,
}

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { value: format!("#{r:02x}{g:02x}{b:02x}") }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format), normalizing
    /// the short form to six digits.
    pub fn parse_hex(s: &str) -> Result<Self, StyleError> {
        let s = s.trim();
        if !s.starts_with('#') {
            return Err(StyleError::MissingHashPrefix(s.to_string()));
        }
        let hex = &s[1..];
        // byte-index slicing below requires ASCII; multibyte input can
        // never be valid hex anyway
        if !hex.is_ascii() {
            return Err(StyleError::NonAsciiHex(s.to_string()));
        }

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Self::from_rgb(r, g, b))
            }
            6 => {
                // #RRGGBB format
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Self::from_rgb(r, g, b))
            }
            other => Err(StyleError::InvalidHexLength(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

fn component(hex: &str, name: &'static str) -> Result<u8, StyleError> {
    u8::from_str_radix(hex, 16).map_err(|source| StyleError::InvalidComponent {
        component: name,
        source,
    })
}

impl Style for Color {
    fn name(&self) -> &'static str {
        "color"
    }

    fn value(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declaration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_uses_fixed_name() {
        let color = Color::new("red");
        assert_eq!(color.declaration(), "color:red");
    }

    #[test]
    fn parse_hex_expands_short_form() {
        let color = Color::parse_hex("#f0a").unwrap();
        assert_eq!(color.as_str(), "#ff00aa");
    }

    #[test]
    fn parse_hex_accepts_long_form() {
        let color = Color::parse_hex(" #102030 ").unwrap();
        assert_eq!(color.as_str(), "#102030");
    }

    #[test]
    fn parse_hex_rejects_missing_prefix() {
        assert!(matches!(
            Color::parse_hex("ff00aa"),
            Err(StyleError::MissingHashPrefix(_))
        ));
    }

    #[test]
    fn parse_hex_rejects_bad_length() {
        assert!(matches!(
            Color::parse_hex("#ffff"),
            Err(StyleError::InvalidHexLength(4))
        ));
    }

    #[test]
    fn parse_hex_rejects_multibyte_input_without_panicking() {
        // 2-byte 'é' + '3' is 3 bytes long, so it reaches the 3-digit arm
        assert!(matches!(
            Color::parse_hex("#\u{e9}3"),
            Err(StyleError::NonAsciiHex(_))
        ));
        assert!(matches!(
            Color::parse_hex("#caf\u{e9}42"),
            Err(StyleError::NonAsciiHex(_))
        ));
    }

    #[test]
    fn parse_hex_rejects_non_hex_digits() {
        assert!(matches!(
            Color::parse_hex("#zzz"),
            Err(StyleError::InvalidComponent { component: "red", .. })
        ));
    }
}
