/// Hex color type with serde support for `"#RGB"` / `"#RRGGBB"` / `"#RRGGBBAA"` strings.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        if !s.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        match s.len() {
            3 | 4 => {
                // Short form: each nibble is doubled (#abc == #aabbcc).
                let mut out = [255u8; 4];
                for (i, c) in s.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    out[i] = v * 17;
                }
                Some(Self::rgba(out[0], out[1], out[2], out[3]))
            }
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Lower-case `#rrggbb` form used inside CSS gradient expressions.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_colors() {
        assert_eq!(HexColor::from_hex("#C678DD").unwrap(), HexColor::rgb(198, 120, 221));
        assert_eq!(HexColor::from_hex("#7aa2f7").unwrap(), HexColor::rgb(122, 162, 247));
    }

    #[test]
    fn test_parse_translucent_window() {
        // The snippet card is #1a1b26 at 95% opacity.
        let c = HexColor::from_hex("#1A1B26F2").unwrap();
        assert_eq!(c, HexColor::rgba(26, 27, 38, 242));
        assert_eq!(c.to_hex(), "#1A1B26F2");
    }

    #[test]
    fn test_short_form_expands_nibbles() {
        assert_eq!(HexColor::from_hex("#09f").unwrap(), HexColor::rgb(0, 153, 255));
        assert_eq!(HexColor::from_hex("#0008").unwrap(), HexColor::rgba(0, 0, 0, 136));
    }

    #[test]
    fn test_builder_colors_use_css_form() {
        let start = HexColor::from_hex("#3B82F6").unwrap();
        assert_eq!(start.to_css(), "#3b82f6");
        assert_eq!(start.to_hex(), "#3B82F6");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "#GG0000", "#12345", "123456", "#ééé", "#1a1b26f2ff"] {
            assert!(HexColor::from_hex(bad).is_none(), "{bad}");
        }
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&HexColor::rgb(255, 95, 86)).unwrap();
        assert_eq!(json, "\"#FF5F56\"");
        let parsed: HexColor = serde_json::from_str("\"#ffbd2e\"").unwrap();
        assert_eq!(parsed, HexColor::rgb(255, 189, 46));
        assert!(serde_json::from_str::<HexColor>("\"orange\"").is_err());
    }
}
