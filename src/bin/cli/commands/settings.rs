use anyhow::{Context, Result};

use annoncard_lib::settings::DisplaySettings;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run_show(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    print_settings(&app.settings.load(), format, use_color)
}

pub fn run_dark_mode(app: &mut App, enabled: bool, format: &OutputFormat, use_color: bool) -> Result<()> {
    app.settings.set_dark_mode(enabled)
        .context("Failed to save dark mode")?;
    print_settings(&app.settings.load(), format, use_color)
}

pub fn run_font_size(app: &mut App, size: f64, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stored = app.settings.set_font_size(size)
        .context("Failed to save font size")?;
    if stored != size && matches!(format, OutputFormat::Plain) {
        println!("Font size is set in whole steps from 10 to 30, using {}", stored);
    }
    print_settings(&app.settings.load(), format, use_color)
}

pub fn run_card_color(app: &mut App, name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    app.settings.set_card_color_name(name)
        .context("Failed to set card color (see `annoncard colors`)")?;
    print_settings(&app.settings.load(), format, use_color)
}

fn print_settings(settings: &DisplaySettings, format: &OutputFormat, use_color: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
        OutputFormat::Plain => {
            println!("Dark mode:  {}", if settings.dark_mode { "on" } else { "off" });
            println!("Font size:  {}", settings.font_size.round() as i64);
            println!("Card color: {} {}",
                terminal::swatch(settings.card_color, use_color), settings.card_color);
        }
    }
    Ok(())
}
