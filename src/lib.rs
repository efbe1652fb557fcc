//! AnnonCard: flashcards grouped by category, with a login gate, a splash
//! screen and persisted display settings.

pub mod config;
pub mod flashcards;
pub mod palette;
pub mod session;
pub mod settings;
pub mod splash;

pub use config::AppConfig;
pub use flashcards::{Card, Catalog, ExpandedSet};
pub use palette::CardColor;
pub use session::{attempt_login, SessionGate};
pub use settings::{DisplaySettings, SettingsStore};
