use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use annoncard_lib::config::{self, AppConfig};
use annoncard_lib::flashcards::{Card, Catalog};
use annoncard_lib::settings::SettingsStore;

/// Shared application state for CLI commands and the TUI
pub struct App {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub settings: SettingsStore,
    pub catalog: Catalog,
}

impl App {
    /// Initialize from the data directory (explicit, `ANNONCARD_DATA_DIR`, or platform default)
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = config::resolve_data_dir(data_dir)
            .context("Failed to get data directory")?;
        let config = AppConfig::load_default().context("Failed to load config")?;
        let settings = SettingsStore::open(&data_dir)
            .context("Failed to open settings")?;

        let catalog = if config.catalog.seed_examples {
            Catalog::seeded()
        } else {
            Catalog::new()
        };

        log::debug!("Using data directory {}", data_dir.display());

        Ok(Self {
            data_dir,
            config,
            settings,
            catalog,
        })
    }

    /// Directory holding bundled assets such as the intro clip
    pub fn assets_dir(&self) -> PathBuf {
        self.config.assets_dir(&self.data_dir)
    }

    /// Find a category by name (exact first, then case-insensitive prefix match)
    pub fn find_category(&self, name: &str) -> Result<(&str, &[Card])> {
        if let Some(exact) = self.catalog.categories().find(|c| *c == name) {
            return Ok((exact, self.catalog.cards(exact).unwrap_or_default()));
        }

        let name_lower = name.to_lowercase();
        let matches: Vec<&str> = self.catalog.categories()
            .filter(|c| c.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.as_slice() {
            [] => bail!("No category matching '{}'. Available categories:\n{}", name,
                self.catalog.categories().map(|c| format!("  - {}", c)).collect::<Vec<_>>().join("\n")),
            [only] => {
                let only = *only;
                Ok((only, self.catalog.cards(only).unwrap_or_default()))
            }
            _ => bail!("Ambiguous category name '{}'. Matches:\n{}", name,
                matches.iter().map(|c| format!("  - {}", c)).collect::<Vec<_>>().join("\n")),
        }
    }
}
