use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// An RGB color attached to a hex item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named colors accepted by [`HexColor::from_str`].
const NAMED_COLORS: &[(&str, HexColor)] = &[
    ("black", HexColor::rgb(0, 0, 0)),
    ("blue", HexColor::rgb(0, 0, 255)),
    ("cyan", HexColor::rgb(0, 255, 255)),
    ("gray", HexColor::GRAY),
    ("green", HexColor::rgb(0, 255, 0)),
    ("grey", HexColor::GRAY),
    ("magenta", HexColor::rgb(255, 0, 255)),
    ("orange", HexColor::rgb(255, 200, 0)),
    ("pink", HexColor::rgb(255, 175, 175)),
    ("red", HexColor::rgb(255, 0, 0)),
    ("white", HexColor::rgb(255, 255, 255)),
    ("yellow", HexColor::rgb(255, 255, 0)),
];

impl HexColor {
    pub const GRAY: HexColor = HexColor::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn named(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// Reverse lookup used when rendering; only exact matches have a name.
    pub fn name(&self) -> Option<&'static str> {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }

    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }

    fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 {
            return None;
        }
        let mut out = [0u8; 3];
        hex::decode_to_slice(digits, &mut out).ok()?;
        Some(Self::rgb(out[0], out[1], out[2]))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::GRAY
    }
}

impl FromStr for HexColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::named(trimmed)
            .or_else(|| Self::from_hex(trimmed))
            .ok_or_else(|| ModelError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).ok_or_else(|| serde::de::Error::custom("color must be #rrggbb"))
    }
}
