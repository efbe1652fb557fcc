use serde::{Deserialize, Serialize};

use crate::palette::CardColor;

/// Store key for the dark mode flag
pub const KEY_DARK_MODE: &str = "isDarkMode";
/// Store key for the card font size
pub const KEY_FONT_SIZE: &str = "fontSize";
/// Store key for the card color name
pub const KEY_CARD_COLOR: &str = "cardColorString";

pub const MIN_FONT_SIZE: f64 = 10.0;
pub const MAX_FONT_SIZE: f64 = 30.0;
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// Clamp a font size into the supported range.
///
/// Sizes move in whole steps, so the value is rounded first. Non-finite
/// values fall back to the default size.
pub fn clamp_font_size(size: f64) -> f64 {
    if size.is_finite() {
        size.round().clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    } else {
        DEFAULT_FONT_SIZE
    }
}

/// Snapshot of the user's display preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub dark_mode: bool,
    pub font_size: f64,
    pub card_color: CardColor,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: DEFAULT_FONT_SIZE,
            card_color: CardColor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DisplaySettings::default();
        assert!(!settings.dark_mode);
        assert_eq!(settings.font_size, 18.0);
        assert_eq!(settings.card_color, CardColor::Purple);
    }

    #[test]
    fn test_clamp_font_size() {
        assert_eq!(clamp_font_size(5.0), 10.0);
        assert_eq!(clamp_font_size(99.0), 30.0);
        assert_eq!(clamp_font_size(22.0), 22.0);
        assert_eq!(clamp_font_size(12.5), 13.0);
        assert_eq!(clamp_font_size(9.6), 10.0);
        assert_eq!(clamp_font_size(f64::NAN), DEFAULT_FONT_SIZE);
    }
}
