//! Card entry flow
//!
//! Collects category, topic, optional answer and optional image for a new
//! card, then hands the result to the catalog.

use std::fs;
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::models::{Card, CardImage};

/// Extensions accepted by [`FileImageSource`]
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic"];

/// Which category a new card goes into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Existing(String),
    New(String),
}

impl Default for CategoryChoice {
    fn default() -> Self {
        Self::New(String::new())
    }
}

impl CategoryChoice {
    /// Category name the card will be filed under (may be empty)
    pub fn resolve(&self) -> &str {
        match self {
            CategoryChoice::Existing(name) | CategoryChoice::New(name) => name,
        }
    }
}

/// A card being composed in the add form
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub choice: CategoryChoice,
    pub topic: String,
    pub answer: String,
    pub image: Option<CardImage>,
}

impl CardDraft {
    pub fn new(choice: CategoryChoice) -> Self {
        Self {
            choice,
            ..Default::default()
        }
    }

    /// Whether submitting would add a card
    pub fn is_complete(&self) -> bool {
        !self.choice.resolve().is_empty() && (!self.topic.is_empty() || self.image.is_some())
    }

    /// Ask the picker for an image; a cancelled pick keeps the current one
    pub fn attach_from(&mut self, source: &mut dyn ImageSource) -> bool {
        match source.pick() {
            Some(image) => {
                self.image = Some(image);
                true
            }
            None => false,
        }
    }

    /// Add the draft to the catalog. Incomplete drafts are dropped silently.
    pub fn submit(self, catalog: &mut Catalog) -> Option<&Card> {
        let answer = if self.answer.is_empty() {
            None
        } else {
            Some(self.answer.as_str())
        };
        catalog.add_card(self.choice.resolve(), &self.topic, answer, self.image)
    }
}

/// Producer of at most one image, invoked on explicit user request
pub trait ImageSource {
    /// Returns `None` when the user cancels or the image cannot be loaded
    fn pick(&mut self) -> Option<CardImage>;
}

/// Loads an image from a file path chosen by the user
#[derive(Debug, Clone, Default)]
pub struct FileImageSource {
    path: Option<PathBuf>,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A source that behaves like a cancelled picker
    pub fn cancelled() -> Self {
        Self { path: None }
    }

    fn load(path: &Path) -> Option<CardImage> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            log::warn!("Not an image file: {}", path.display());
            return None;
        }

        match fs::read(path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                log::debug!("Loaded image {} ({} bytes)", name, bytes.len());
                Some(CardImage::new(name, bytes))
            }
            Err(e) => {
                log::warn!("Failed to load image {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl ImageSource for FileImageSource {
    fn pick(&mut self) -> Option<CardImage> {
        let path = self.path.take()?;
        Self::load(&path)
    }
}
