use annoncard_lib::flashcards::{Card, CardFace};
use annoncard_lib::palette::{CardColor, Rgb};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const WHITE: &str = "\x1b[97m";
    pub const GRAY: &str = "\x1b[90m";
}

/// 24-bit foreground escape
pub fn fg(rgb: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", rgb.0, rgb.1, rgb.2)
}

/// 24-bit background escape
pub fn bg(rgb: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", rgb.0, rgb.1, rgb.2)
}

/// A small colored block, or the bracketed name without colors
pub fn swatch(color: CardColor, use_color: bool) -> String {
    if use_color {
        format!("{}\u{2588}\u{2588}{}", fg(color.rgb()), Color::RESET)
    } else {
        format!("[{}]", color.name())
    }
}

/// Text shown on one side of a card
pub fn face_text(face: CardFace<'_>) -> String {
    match face {
        CardFace::Topic(topic) => topic.to_string(),
        CardFace::Answer(answer) => answer.to_string(),
        CardFace::Image(image) => format!("[Image: {} ({} bytes)]", image.name, image.size()),
        CardFace::Blank => String::new(),
    }
}

/// Render a card as a colored box with the topic on top and the back below
pub fn render_card(card: &Card, number: usize, color: CardColor, use_color: bool, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4).max(8);
    let mut body = wrap_lines(&face_text(card.face(false)), "", inner);
    let back = face_text(card.face(true));
    if !back.is_empty() {
        body.push("\u{2500}".repeat(inner));
        body.extend(wrap_lines(&back, "", inner));
    }

    let (open, close) = if use_color {
        (format!("{}{}{}", bg(color.rgb()), Color::WHITE, Color::BOLD), Color::RESET.to_string())
    } else {
        (String::new(), String::new())
    };

    let mut lines = Vec::with_capacity(body.len() + 3);
    lines.push(format!("#{}", number));
    lines.push(format!("{}\u{250c}{}\u{2510}{}", open, "\u{2500}".repeat(inner + 2), close));
    for line in body {
        let pad = inner.saturating_sub(line.chars().count());
        lines.push(format!("{}\u{2502} {}{} \u{2502}{}", open, line, " ".repeat(pad), close));
    }
    lines.push(format!("{}\u{2514}{}\u{2518}{}", open, "\u{2500}".repeat(inner + 2), close));
    lines
}

/// Shorten to `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Greedy word wrap, counting characters rather than bytes
pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.chars().count()).max(1);

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current_line.chars().count();
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_len + 1 + word_len <= effective_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(format!("{}{}", prefix, current_line));
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(format!("{}{}", prefix, current_line));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_counts_chars() {
        let lines = wrap_lines("Eine mathematische Konstante ~ 3.14159", "", 20);
        assert_eq!(lines, vec!["Eine mathematische", "Konstante ~ 3.14159"]);
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Größenordnung", 8), "Größe...");
        assert_eq!(truncate("kurz", 8), "kurz");
    }

    #[test]
    fn test_plain_card_has_no_escapes() {
        let card = Card::new("Dauer".to_string(), Some("1939-1945".to_string()), None);
        let lines = render_card(&card, 1, CardColor::Blue, false, 24);
        assert!(lines.iter().all(|l| !l.contains('\x1b')));
        assert!(lines.iter().any(|l| l.contains("Dauer")));
        assert!(lines.iter().any(|l| l.contains("1939-1945")));
    }

    #[test]
    fn test_swatch_without_color() {
        assert_eq!(swatch(CardColor::Red, false), "[Red]");
    }
}
