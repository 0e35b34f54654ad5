//! RGB-Farbe mit Deckkraft im Kartendatei-Format `#RRGGBB <opacity>`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Farbe mit 8-Bit-Kanälen und Deckkraft `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub opacity: f64,
}

impl Color {
    /// Standard-Füllfarbe neuer Formen (#90EE90)
    pub const LIGHT_GREEN: Color = Color::rgb(0x90, 0xEE, 0x90);
    /// Standard-Randfarbe und Farbe unselektierter Kontrollpunkte (#808080)
    pub const GREY: Color = Color::rgb(0x80, 0x80, 0x80);
    /// Füllfarbe des Auswahlrechtecks (#D3D3D3)
    pub const LIGHT_GREY: Color = Color::rgb(0xD3, 0xD3, 0xD3);
    /// Farbe selektierter Kontrollpunkte
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Erstellt eine vollständig deckende Farbe.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            opacity: 1.0,
        }
    }

    /// Gibt eine Kopie mit geänderter Deckkraft zurück.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Hex-Darstellung in Großbuchstaben, z.B. `#90EE90`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Liest `#RRGGBB` (Groß- oder Kleinschreibung) und kombiniert mit der Deckkraft.
    pub fn from_hex(hex: &str, opacity: f64) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            opacity,
        })
    }
}

/// Format wie in der Kartendatei: `#RRGGBB 1.000000`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.6}", self.to_hex(), self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_file_format() {
        assert_eq!(Color::LIGHT_GREEN.to_string(), "#90EE90 1.000000");
        assert_eq!(Color::GREY.with_opacity(0.4).to_string(), "#808080 0.400000");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#00FF00", 1.0), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#90ee90", 1.0), Some(Color::LIGHT_GREEN));
        assert_eq!(Color::from_hex("00FF00", 1.0), None);
        assert_eq!(Color::from_hex("#00FF0", 1.0), None);
        assert_eq!(Color::from_hex("#GGFF00", 1.0), None);
    }
}
