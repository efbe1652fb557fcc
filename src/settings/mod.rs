//! Display settings: dark mode, card font size and card color

mod models;
mod store;

pub use models::*;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, Result, SettingsError, SettingsStore};
