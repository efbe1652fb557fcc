use std::collections::HashSet;

use super::catalog::Catalog;

/// Categories currently expanded in the browser. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ExpandedSet {
    names: HashSet<String>,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a category's membership and return whether it is now expanded
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.names.remove(category) {
            false
        } else {
            self.names.insert(category.to_string());
            true
        }
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.names.contains(category)
    }

    pub fn collapse_all(&mut self) {
        self.names.clear();
    }

    /// Forget categories that have disappeared from the catalog
    pub fn retain_existing(&mut self, catalog: &Catalog) {
        self.names.retain(|name| catalog.contains(name));
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
