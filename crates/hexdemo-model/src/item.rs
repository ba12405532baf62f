//! The value stored by both demo collections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{HexColor, ModelError, Result};

/// Letter given to a freshly created item.
pub const DEFAULT_LETTER: char = 'A';

/// One displayable unit: a single uppercase letter drawn on a colored hexagon.
///
/// Items compare by value, so two separately created items with the same
/// letter and color are considered the same entry by `contains`/`index_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHexItem")]
pub struct HexItem {
    letter: char,
    color: HexColor,
}

impl HexItem {
    pub fn new(letter: char, color: HexColor) -> Result<Self> {
        Ok(Self {
            letter: normalize_letter(letter)?,
            color,
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn set_letter(&mut self, letter: char) -> Result<()> {
        self.letter = normalize_letter(letter)?;
        Ok(())
    }

    /// Apply free-form text from an edit prompt.
    ///
    /// Empty text keeps the current letter; otherwise only the first
    /// character is used.
    pub fn set_letter_from_text(&mut self, text: &str) -> Result<()> {
        match text.trim().chars().next() {
            Some(letter) => self.set_letter(letter),
            None => Ok(()),
        }
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }
}

/// Unvalidated wire form; deserialization goes through [`HexItem::new`].
#[derive(Deserialize)]
struct RawHexItem {
    letter: char,
    color: HexColor,
}

impl TryFrom<RawHexItem> for HexItem {
    type Error = ModelError;

    fn try_from(raw: RawHexItem) -> Result<Self> {
        HexItem::new(raw.letter, raw.color)
    }
}

impl Default for HexItem {
    fn default() -> Self {
        Self {
            letter: DEFAULT_LETTER,
            color: HexColor::default(),
        }
    }
}

fn normalize_letter(letter: char) -> Result<char> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase())
    } else {
        Err(ModelError::InvalidLetter(letter.to_string()))
    }
}

impl fmt::Display for HexItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.color)
    }
}

/// Parses `<letter>[:<color>]`, e.g. `B:blue`, `c:#00ff00` or `D`.
impl FromStr for HexItem {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let (letter, color) = match s.trim().split_once(':') {
            Some((letter, color)) => (letter, color.parse::<HexColor>()?),
            None => (s.trim(), HexColor::default()),
        };
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter, color),
            _ => Err(ModelError::InvalidLetter(letter.to_string())),
        }
    }
}
