use crate::item::{Category, InventoryItem, StockStatus};

/// Transient filter state over the collection.
///
/// Recomputed on every change event and never mutates the collection; given
/// the same collection and state, filtering yields the same rows every time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring match against SKU and name; empty matches all.
    pub search_term: String,
    /// Exact category match when set.
    pub category: Option<Category>,
    /// Derived-status match when set.
    pub status: Option<StockStatus>,
}

impl FilterState {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let term = self.search_term.to_lowercase();
        let match_term = term.is_empty()
            || item.sku().as_str().to_lowercase().contains(&term)
            || item.name().to_lowercase().contains(&term);
        let match_category = self.category.map_or(true, |c| item.category() == c);
        let match_status = self.status.map_or(true, |s| item.status() == s);
        match_term && match_category && match_status
    }
}
