use mejorsol_core::{DomainError, DomainResult, Entity, Sku};

use crate::item::{InventoryItem, ItemFields};

/// Ordered collection of inventory items, keyed by unique SKU.
///
/// This is the single source of truth: any rendered table is a projection of
/// it, never an independent store. Insertion order is preserved for display;
/// an edit updates in place and keeps the item's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryCollection {
    items: Vec<InventoryItem>,
}

impl InventoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pre-validated items, rejecting duplicate SKUs.
    pub fn from_items(items: impl IntoIterator<Item = InventoryItem>) -> DomainResult<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.insert(item)?;
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn get(&self, sku: &Sku) -> Option<&InventoryItem> {
        self.position(sku).map(|idx| &self.items[idx])
    }

    pub fn contains(&self, sku: &Sku) -> bool {
        self.position(sku).is_some()
    }

    fn position(&self, sku: &Sku) -> Option<usize> {
        self.items.iter().position(|item| item.id() == sku)
    }

    /// Append a new item in last position.
    pub fn insert(&mut self, item: InventoryItem) -> DomainResult<&InventoryItem> {
        if self.contains(item.id()) {
            return Err(DomainError::duplicate_sku(item.id().as_str()));
        }
        let idx = self.items.len();
        self.items.push(item);
        Ok(&self.items[idx])
    }

    /// Replace every field but the SKU of the item at `sku`, in place.
    pub fn update(&mut self, sku: &Sku, fields: ItemFields) -> DomainResult<&InventoryItem> {
        let idx = self
            .position(sku)
            .ok_or_else(|| DomainError::not_found(sku.as_str()))?;
        self.items[idx].apply_fields(fields);
        Ok(&self.items[idx])
    }

    /// Remove and return the item at `sku`. Irreversible.
    pub fn remove(&mut self, sku: &Sku) -> DomainResult<InventoryItem> {
        let idx = self
            .position(sku)
            .ok_or_else(|| DomainError::not_found(sku.as_str()))?;
        Ok(self.items.remove(idx))
    }

    pub(crate) fn get_mut(&mut self, sku: &Sku) -> DomainResult<&mut InventoryItem> {
        let idx = self
            .position(sku)
            .ok_or_else(|| DomainError::not_found(sku.as_str()))?;
        Ok(&mut self.items[idx])
    }
}
