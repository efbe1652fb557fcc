use anyhow::Result;

use annoncard_lib::palette::CardColor;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let current = app.settings.card_color();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = CardColor::ALL.iter().map(|c| {
                let rgb = c.rgb();
                serde_json::json!({
                    "name": c.name(),
                    "rgb": [rgb.0, rgb.1, rgb.2],
                    "selected": *c == current,
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for color in CardColor::ALL {
                let marker = if color == current { "* " } else { "  " };
                let rgb = color.rgb();
                println!("{}{} {:<7} #{:02x}{:02x}{:02x}",
                    marker, terminal::swatch(color, use_color), color.name(), rgb.0, rgb.1, rgb.2);
            }
        }
    }

    Ok(())
}
