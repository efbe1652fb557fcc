//! Card color palette
//!
//! Maps the stored card color name to a display color. The palette is
//! fixed; anything outside it falls back to purple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An sRGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Card background colors selectable in the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardColor {
    #[default]
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Pink,
    Gray,
}

impl CardColor {
    /// All palette entries in picker order
    pub const ALL: [CardColor; 8] = [
        CardColor::Purple,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
        CardColor::Orange,
        CardColor::Red,
        CardColor::Pink,
        CardColor::Gray,
    ];

    /// Name as persisted in the settings store
    pub fn name(self) -> &'static str {
        match self {
            CardColor::Purple => "Purple",
            CardColor::Blue => "Blue",
            CardColor::Green => "Green",
            CardColor::Yellow => "Yellow",
            CardColor::Orange => "Orange",
            CardColor::Red => "Red",
            CardColor::Pink => "Pink",
            CardColor::Gray => "Gray",
        }
    }

    /// Exact lookup of a stored name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Resolve a stored name, falling back to the default for unknown names
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn rgb(self) -> Rgb {
        match self {
            CardColor::Purple => Rgb(175, 82, 222),
            CardColor::Blue => Rgb(0, 122, 255),
            CardColor::Green => Rgb(52, 199, 89),
            CardColor::Yellow => Rgb(255, 204, 0),
            CardColor::Orange => Rgb(255, 149, 0),
            CardColor::Red => Rgb(255, 59, 48),
            CardColor::Pink => Rgb(255, 45, 85),
            CardColor::Gray => Rgb(142, 142, 147),
        }
    }

    /// Next entry in picker order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous entry in picker order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name outside the palette
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown card color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for CardColor {
    type Err = UnknownColor;

    /// Case-insensitive parse, for command-line input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownColor(trimmed.to_string()))
    }
}
