//! Flashcard catalog for AnnonCard
//!
//! This module provides:
//! - Card and category models
//! - The in-memory catalog (add, delete, search)
//! - Expand/collapse state for the category browser
//! - The card entry flow and image picking

pub mod catalog;
pub mod entry;
pub mod expanded;
pub mod models;

pub use catalog::Catalog;
pub use entry::{CardDraft, CategoryChoice, FileImageSource, ImageSource};
pub use expanded::ExpandedSet;
pub use models::*;
