use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, category_name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let (name, cards) = app.find_category(category_name)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "category": name,
                "cards": cards,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if use_color {
                println!("{}{}{}", terminal::Color::BOLD, name, terminal::Color::RESET);
            } else {
                println!("{}", name);
            }
            println!();

            let display = app.settings.load();
            let width = card_width(display.font_size);
            for (i, card) in cards.iter().enumerate() {
                for line in terminal::render_card(card, i + 1, display.card_color, use_color, width) {
                    println!("{}", line);
                }
                println!();
            }

            println!("{} cards", cards.len());
        }
    }

    Ok(())
}

/// Card box width in columns; larger fonts get wider cards
pub fn card_width(font_size: f64) -> usize {
    (font_size * 2.0).round() as usize + 4
}
