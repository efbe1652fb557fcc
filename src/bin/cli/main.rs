mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "annoncard", about = "AnnonCard flashcards: TUI and CLI", version)]
struct Cli {
    /// Data directory holding settings.json (default: $ANNONCARD_DATA_DIR, then the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Switch {
    On,
    Off,
}

#[derive(Subcommand)]
enum Command {
    /// List categories with their card counts
    Categories {
        /// Only categories whose name or card topics contain this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the cards of a category
    Show {
        /// Category name (case-insensitive prefix match)
        category: String,
    },

    /// Display settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// List the available card colors
    Colors,

    /// Check a username/password pair against the login gate
    Login {
        username: String,
        password: String,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Show current settings
    Show,

    /// Turn dark mode on or off
    DarkMode {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Set the card font size (clamped to 10-30)
    FontSize {
        #[arg(allow_negative_numbers = true)]
        size: f64,
    },

    /// Set the card color by name
    CardColor {
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(data_dir)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Categories { search }) => {
            let app = app::App::new(data_dir)?;
            commands::categories::run(&app, search.as_deref(), &cli.format, use_color)?;
        }
        Some(Command::Show { category }) => {
            let app = app::App::new(data_dir)?;
            commands::show::run(&app, &category, &cli.format, use_color)?;
        }
        Some(Command::Settings(subcmd)) => {
            let mut app = app::App::new(data_dir)?;
            match subcmd {
                SettingsCommand::Show => {
                    commands::settings::run_show(&app, &cli.format, use_color)?;
                }
                SettingsCommand::DarkMode { state } => {
                    let enabled = matches!(state, Switch::On);
                    commands::settings::run_dark_mode(&mut app, enabled, &cli.format, use_color)?;
                }
                SettingsCommand::FontSize { size } => {
                    commands::settings::run_font_size(&mut app, size, &cli.format, use_color)?;
                }
                SettingsCommand::CardColor { name } => {
                    commands::settings::run_card_color(&mut app, &name, &cli.format, use_color)?;
                }
            }
        }
        Some(Command::Colors) => {
            let app = app::App::new(data_dir)?;
            commands::colors::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Login { username, password }) => {
            if !commands::login::run(&username, &password, &cli.format)? {
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(data_dir)?;
        }
    }

    Ok(())
}
