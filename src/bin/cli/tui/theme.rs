use ratatui::style::{Color, Style};

use annoncard_lib::palette::CardColor;
use annoncard_lib::settings::DisplaySettings;

/// Colors for one frame, derived from the display settings
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub highlight: Color,
    pub card: Color,
    pub card_text: Color,
}

impl Theme {
    pub fn from_settings(settings: &DisplaySettings) -> Self {
        let card = card_color(settings.card_color);
        if settings.dark_mode {
            Self {
                bg: Color::Rgb(0, 0, 0),
                fg: Color::Rgb(235, 235, 245),
                dim: Color::DarkGray,
                highlight: Color::Rgb(44, 44, 46),
                card,
                card_text: Color::White,
            }
        } else {
            Self {
                bg: Color::Rgb(255, 255, 255),
                fg: Color::Rgb(28, 28, 30),
                dim: Color::Gray,
                highlight: Color::Rgb(229, 229, 234),
                card,
                card_text: Color::White,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }
}

pub fn card_color(color: CardColor) -> Color {
    let rgb = color.rgb();
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_and_light_backgrounds_differ() {
        let mut settings = DisplaySettings::default();
        settings.dark_mode = true;
        let dark = Theme::from_settings(&settings);
        settings.dark_mode = false;
        let light = Theme::from_settings(&settings);
        assert_ne!(dark.bg, light.bg);
        assert_eq!(dark.card, light.card);
    }

    #[test]
    fn test_card_color_follows_setting() {
        let settings = DisplaySettings {
            card_color: CardColor::Green,
            ..Default::default()
        };
        let theme = Theme::from_settings(&settings);
        let rgb = CardColor::Green.rgb();
        assert_eq!(theme.card, Color::Rgb(rgb.0, rgb.1, rgb.2));
    }
}
