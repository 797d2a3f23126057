//! Collection configuration.

use crate::order::SortOrder;

/// The slot key the collection is stored under when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "bookshelf_books";

/// Configuration for opening a collection.
#[derive(Debug, Clone)]
pub struct ShelfConfig {
    /// The persistent slot the collection is stored under.
    pub slot_key: String,

    /// Presentation order for listings.
    pub order: SortOrder,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            order: SortOrder::default(),
        }
    }
}

impl ShelfConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot key the collection is stored under.
    #[must_use]
    pub fn slot_key(mut self, key: impl Into<String>) -> Self {
        self.slot_key = key.into();
        self
    }

    /// Sets the presentation order for listings.
    #[must_use]
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.slot_key, DEFAULT_SLOT_KEY);
        assert_eq!(config.order, SortOrder::TitleAscending);
    }

    #[test]
    fn builder_pattern() {
        let config = ShelfConfig::new()
            .slot_key("archive_books")
            .order(SortOrder::RecencyDescending);

        assert_eq!(config.slot_key, "archive_books");
        assert_eq!(config.order, SortOrder::RecencyDescending);
    }
}
