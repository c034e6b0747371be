use serde::{Deserialize, Deserializer, Serialize, de};

/// An opaque RGB color.
///
/// Deserializes from either a hex string (`#RGB` / `#RRGGBB`) or an
/// `{ "r": .., "g": .., "b": .. }` map.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Components scaled to `0.0..=1.0`, the form PDF color operators expect.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Color must use ASCII hex digits, got: {}", s));
        }

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => {
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color::rgb(r, g, b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#fff"), Ok(Color::WHITE));
        assert_eq!(Color::parse_hex(" #1A2b3C "), Ok(Color::rgb(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::parse_hex("fff").is_err());
        assert!(Color::parse_hex("#ffff").is_err());
        assert!(Color::parse_hex("#gg0000").is_err());
    }

    #[test]
    fn rejects_non_ascii_digits_without_panicking() {
        // Three bytes but two characters.
        assert!(Color::parse_hex("#éa").is_err());
        assert!(Color::parse_hex("#ab€").is_err());
        assert!(serde_json::from_str::<Color>("\"#éa\"").is_err());
    }

    #[test]
    fn deserializes_from_string_or_map() {
        let from_str: Color = serde_json::from_str("\"#C0392B\"").unwrap();
        let from_map: Color = serde_json::from_str(r#"{"r":192,"g":57,"b":43}"#).unwrap();
        assert_eq!(from_str, from_map);
    }

    #[test]
    fn unit_rgb_scales_components() {
        assert_eq!(Color::WHITE.to_unit_rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_unit_rgb(), [0.0, 0.0, 0.0]);
    }
}
