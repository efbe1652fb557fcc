//! Persisted display settings
//!
//! Settings live in a flat key-value store. Every setter writes through
//! immediately; every getter falls back to the field's default when the
//! entry is missing or has the wrong type.
//!
//! File layout:
//! ```text
//! {data-dir}/settings.json   # {"isDarkMode": false, "fontSize": 18.0, "cardColorString": "Purple"}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::models::*;
use crate::palette::{CardColor, UnknownColor};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// A flat store of string, number and bool entries keyed by setting name
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Volatile store, used for tests and when no data directory is available
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: serde_json::Map<String, Value>,
}

impl JsonFileStore {
    /// Name of the settings file inside the data directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Open the settings file in `data_dir`. The file is created on first write.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(Self::FILE_NAME);
        let entries = if path.exists() {
            let content = fs::read(&path)?;
            match serde_json::from_slice::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    log::warn!(
                        "Ignoring unreadable settings file {}, using defaults",
                        path.display()
                    );
                    serde_json::Map::new()
                }
            }
        } else {
            serde_json::Map::new()
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &serde_json::Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Write through to disk; the in-memory entry only changes once the write succeeds
    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.write(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

/// Typed access to the display settings held in a [`KeyValueStore`]
#[derive(Debug)]
pub struct SettingsStore<S = JsonFileStore> {
    store: S,
}

impl SettingsStore<JsonFileStore> {
    /// Open the settings file in the given data directory
    pub fn open(data_dir: &Path) -> Result<Self> {
        Ok(Self::new(JsonFileStore::open(data_dir)?))
    }
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read all fields, each independently defaulted
    pub fn load(&self) -> DisplaySettings {
        DisplaySettings {
            dark_mode: self.dark_mode(),
            font_size: self.font_size(),
            card_color: self.card_color(),
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.store
            .get(KEY_DARK_MODE)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        log::debug!("Setting dark mode to {}", enabled);
        self.store.set(KEY_DARK_MODE, Value::Bool(enabled))
    }

    pub fn font_size(&self) -> f64 {
        self.store
            .get(KEY_FONT_SIZE)
            .and_then(Value::as_f64)
            .map(clamp_font_size)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Store a font size, clamped to the supported range. Returns the stored value.
    pub fn set_font_size(&mut self, size: f64) -> Result<f64> {
        let clamped = clamp_font_size(size);
        if clamped != size {
            log::debug!("Font size {} clamped to {}", size, clamped);
        }
        self.store.set(KEY_FONT_SIZE, Value::from(clamped))?;
        Ok(clamped)
    }

    /// Current card color. Names outside the palette read as the default.
    pub fn card_color(&self) -> CardColor {
        self.store
            .get(KEY_CARD_COLOR)
            .and_then(Value::as_str)
            .map(CardColor::resolve)
            .unwrap_or_default()
    }

    pub fn set_card_color(&mut self, color: CardColor) -> Result<()> {
        log::debug!("Setting card color to {}", color);
        self.store
            .set(KEY_CARD_COLOR, Value::String(color.name().to_string()))
    }

    /// Parse a color name and store it. Names outside the palette are refused.
    pub fn set_card_color_name(&mut self, name: &str) -> Result<CardColor> {
        let color: CardColor = name.parse()?;
        self.set_card_color(color)?;
        Ok(color)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}
