//! `mejorsol-inventory` — the inventory admin domain.
//!
//! An explicit in-memory collection of items (the single source of truth),
//! filter/search over it, modal-driven create/edit, row-level stock movement,
//! a flat display projection for renderers, and CSV export of the visible
//! rows. Rendered tables are projections of the collection, never the store.

pub mod collection;
pub mod controller;
pub mod export;
pub mod filter;
pub mod item;
pub mod modal;
pub mod render;

pub use collection::InventoryCollection;
pub use controller::InventoryController;
pub use filter::FilterState;
pub use item::{Category, InventoryItem, ItemDraft, StockDirection, StockStatus};
pub use modal::{FormField, ModalForm, ModalMode, ModalState};
pub use render::DisplayRow;
