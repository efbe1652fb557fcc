use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, truncate};
use crate::OutputFormat;

pub fn run(app: &App, search: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let query = search.unwrap_or("");
    let categories = app.catalog.filter(query);

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = categories.iter().map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "cardCount": c.card_count(),
                    "topics": c.cards.iter().map(|card| card.topic.as_str()).collect::<Vec<_>>(),
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if categories.is_empty() {
                if query.is_empty() {
                    println!("No flashcards yet.");
                } else {
                    println!("No categories matching '{}'.", query);
                }
                return Ok(());
            }

            let name_w = categories.iter()
                .map(|c| c.name.chars().count())
                .max()
                .unwrap_or(8)
                .clamp(8, 40);

            println!("{:<name_w$} Cards", "Category", name_w = name_w);
            println!("{} {}", "\u{2500}".repeat(name_w), "\u{2500}".repeat(6));

            for category in &categories {
                let name = truncate(category.name, name_w);
                if use_color {
                    println!("{}{:<name_w$}{} {}",
                        terminal::Color::BOLD, name, terminal::Color::RESET, category.card_count(),
                        name_w = name_w);
                } else {
                    println!("{:<name_w$} {}", name, category.card_count(), name_w = name_w);
                }
            }

            println!("\n{} categories", categories.len());
        }
    }

    Ok(())
}
