use mejorsol_core::{DomainError, DomainResult, Sku};

use crate::collection::InventoryCollection;
use crate::export;
use crate::filter::FilterState;
use crate::item::{InventoryItem, ItemDraft, StockDirection};

/// Owns the inventory collection and the active filter, and mediates every
/// mutation: create, edit, delete, stock movement, CSV export.
///
/// All operations are synchronous and atomic with respect to the event that
/// triggered them; a failed operation leaves the collection unchanged.
/// Confirmation prompts (delete) and quantity prompts (movement) are the
/// caller's concern — the controller only consumes their results.
#[derive(Debug, Clone, Default)]
pub struct InventoryController {
    collection: InventoryCollection,
    filter: FilterState,
}

impl InventoryController {
    pub fn new(collection: InventoryCollection) -> Self {
        Self {
            collection,
            filter: FilterState::default(),
        }
    }

    pub fn collection(&self) -> &InventoryCollection {
        &self.collection
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Replace the transient filter state (search keystroke, dropdown change).
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// The rows currently matching the active filter, in display order.
    ///
    /// Pure with respect to (collection, filter): restartable on every change
    /// event with no accumulated state.
    pub fn visible(&self) -> impl Iterator<Item = &InventoryItem> {
        self.collection.iter().filter(|item| self.filter.matches(item))
    }

    /// Validate the draft and append a new item in last position.
    pub fn create_item(&mut self, draft: &ItemDraft) -> DomainResult<&InventoryItem> {
        let sku = draft.validated_sku()?;
        let fields = draft.validate()?;
        tracing::info!(sku = %sku, name = %fields.name, "creating inventory item");
        self.collection.insert(InventoryItem::from_fields(sku, fields))
    }

    /// Update every field but the SKU; the draft's SKU field is ignored
    /// because identity is fixed at creation.
    pub fn edit_item(&mut self, sku: &Sku, draft: &ItemDraft) -> DomainResult<&InventoryItem> {
        let fields = draft.validate()?;
        tracing::info!(sku = %sku, "updating inventory item");
        self.collection.update(sku, fields)
    }

    /// Remove the item. Irreversible once the caller has confirmed.
    pub fn delete_item(&mut self, sku: &Sku) -> DomainResult<InventoryItem> {
        tracing::info!(sku = %sku, "deleting inventory item");
        self.collection.remove(sku)
    }

    /// Apply a stock movement: `In` adds, `Out` subtracts with a floor of
    /// zero. A non-positive or non-numeric quantity fails without mutating.
    pub fn move_stock(
        &mut self,
        sku: &Sku,
        direction: StockDirection,
        quantity: f64,
    ) -> DomainResult<&InventoryItem> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(DomainError::invalid_quantity(format!(
                "quantity must be a positive number, got {quantity}"
            )));
        }
        let item = self.collection.get_mut(sku)?;
        match direction {
            StockDirection::In => item.receive(quantity),
            StockDirection::Out => item.withdraw(quantity),
        }
        tracing::info!(
            sku = %sku,
            direction = direction.label(),
            quantity,
            stock = item.stock(),
            "stock moved"
        );
        Ok(&*item)
    }

    /// Serialize the visible rows (exactly what the user currently sees) to
    /// CSV, header first.
    pub fn export_csv(&self) -> anyhow::Result<String> {
        export::export_csv(self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StockStatus;

    fn draft(sku: &str, name: &str, category: &str, stock: &str, minimum: &str, price: &str) -> ItemDraft {
        ItemDraft {
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            stock: stock.into(),
            minimum: minimum.into(),
            price: price.into(),
        }
    }

    fn seeded() -> InventoryController {
        let mut controller = InventoryController::default();
        controller
            .create_item(&draft("P1", "Panel A", "Paneles", "5", "10", "100000"))
            .unwrap();
        controller
            .create_item(&draft("B1", "Batería 100Ah", "Baterías", "20", "5", "380000"))
            .unwrap();
        controller
    }

    #[test]
    fn create_appends_in_last_position() {
        let mut controller = seeded();
        controller
            .create_item(&draft("I1", "Inversor 3kW", "Inversores", "8", "2", "450000"))
            .unwrap();
        let order: Vec<&str> = controller
            .collection()
            .iter()
            .map(|i| i.sku().as_str())
            .collect();
        assert_eq!(order, ["P1", "B1", "I1"]);
    }

    #[test]
    fn duplicate_create_fails_and_leaves_collection_unchanged() {
        let mut controller = seeded();
        let err = controller
            .create_item(&draft("P1", "X", "Paneles", "0", "0", "0"))
            .unwrap_err();
        assert_eq!(err, DomainError::duplicate_sku("P1"));

        assert_eq!(controller.collection().len(), 2);
        let sku: Sku = "P1".parse().unwrap();
        assert_eq!(controller.collection().get(&sku).unwrap().name(), "Panel A");
    }

    #[test]
    fn edit_never_changes_the_sku() {
        let mut controller = seeded();
        let sku: Sku = "P1".parse().unwrap();
        let edited = controller
            .edit_item(&sku, &draft("OTHER-SKU", "Panel A+", "Paneles", "6", "10", "110000"))
            .unwrap();
        assert_eq!(edited.sku().as_str(), "P1");
        assert_eq!(edited.name(), "Panel A+");
        assert!(!controller.collection().contains(&"OTHER-SKU".parse().unwrap()));
    }

    #[test]
    fn edit_unknown_sku_is_not_found() {
        let mut controller = seeded();
        let sku: Sku = "NOPE".parse().unwrap();
        let err = controller
            .edit_item(&sku, &draft("NOPE", "Ghost", "Paneles", "0", "0", "0"))
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("NOPE"));
    }

    #[test]
    fn invalid_edit_leaves_the_item_untouched() {
        let mut controller = seeded();
        let sku: Sku = "P1".parse().unwrap();
        let err = controller
            .edit_item(&sku, &draft("P1", "  ", "Paneles", "6", "10", "110000"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let item = controller.collection().get(&sku).unwrap();
        assert_eq!(item.name(), "Panel A");
        assert_eq!(item.stock(), 5.0);
    }

    #[test]
    fn move_stock_rejects_non_positive_quantities_without_mutation() {
        let mut controller = seeded();
        let sku: Sku = "P1".parse().unwrap();

        for qty in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let err = controller
                .move_stock(&sku, StockDirection::In, qty)
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidQuantity(_)), "qty {qty}");
        }
        assert_eq!(controller.collection().get(&sku).unwrap().stock(), 5.0);
    }

    #[test]
    fn move_stock_out_floors_at_zero() {
        let mut controller = seeded();
        let sku: Sku = "P1".parse().unwrap();
        let item = controller
            .move_stock(&sku, StockDirection::Out, 999.0)
            .unwrap();
        assert_eq!(item.stock(), 0.0);
        assert_eq!(item.status(), StockStatus::Low);
    }

    #[test]
    fn move_stock_unknown_sku_is_not_found() {
        let mut controller = seeded();
        let sku: Sku = "NOPE".parse().unwrap();
        let err = controller
            .move_stock(&sku, StockDirection::In, 1.0)
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("NOPE"));
    }

    // Scenario from the admin page: a low-stock row leaves the LOW view once
    // enough stock comes in.
    #[test]
    fn stock_in_moves_a_row_out_of_the_low_view() {
        let mut controller = InventoryController::default();
        controller
            .create_item(&draft("P1", "Panel A", "Paneles", "5", "10", "100000"))
            .unwrap();
        controller.set_filter(FilterState {
            status: Some(StockStatus::Low),
            ..FilterState::default()
        });

        let low: Vec<&str> = controller.visible().map(|i| i.sku().as_str()).collect();
        assert_eq!(low, ["P1"]);

        let sku: Sku = "P1".parse().unwrap();
        let item = controller
            .move_stock(&sku, StockDirection::In, 10.0)
            .unwrap();
        assert_eq!(item.stock(), 15.0);
        assert_eq!(item.status(), StockStatus::Ok);

        assert_eq!(controller.visible().count(), 0);
    }

    #[test]
    fn visible_is_idempotent_for_unchanged_inputs() {
        let mut controller = seeded();
        controller.set_filter(FilterState {
            search_term: "panel".into(),
            ..FilterState::default()
        });

        let first: Vec<String> = controller
            .visible()
            .map(|i| i.sku().as_str().to_string())
            .collect();
        let second: Vec<String> = controller
            .visible()
            .map(|i| i.sku().as_str().to_string())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, ["P1"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn amount() -> impl Strategy<Value = f64> {
            0.0f64..10_000.0
        }

        proptest! {
            /// Status always derives from the current stock and minimum,
            /// immediately after any mutation.
            #[test]
            fn status_matches_levels_after_any_movement(
                stock in amount(),
                minimum in amount(),
                quantity in 0.001f64..10_000.0,
                incoming in proptest::bool::ANY,
            ) {
                let mut controller = InventoryController::default();
                controller
                    .create_item(&draft(
                        "P1",
                        "Panel A",
                        "Paneles",
                        &stock.to_string(),
                        &minimum.to_string(),
                        "1000",
                    ))
                    .unwrap();

                let sku: Sku = "P1".parse().unwrap();
                let direction = if incoming { StockDirection::In } else { StockDirection::Out };
                let item = controller.move_stock(&sku, direction, quantity).unwrap();

                prop_assert!(item.stock() >= 0.0);
                prop_assert_eq!(item.status() == StockStatus::Low, item.stock() <= item.minimum());
            }

            /// Out-movements never take stock below zero, whatever the sequence.
            #[test]
            fn stock_never_goes_negative(
                initial in amount(),
                withdrawals in proptest::collection::vec(0.001f64..500.0, 1..20),
            ) {
                let mut controller = InventoryController::default();
                controller
                    .create_item(&draft("P1", "Panel A", "Paneles", &initial.to_string(), "5", "1000"))
                    .unwrap();

                let sku: Sku = "P1".parse().unwrap();
                for qty in withdrawals {
                    let item = controller.move_stock(&sku, StockDirection::Out, qty).unwrap();
                    prop_assert!(item.stock() >= 0.0);
                }
            }

            /// Filtering is a pure function of (collection, state).
            #[test]
            fn filtering_is_idempotent(term in "[a-zA-Z0-9 -]{0,12}") {
                let mut controller = seeded();
                controller.set_filter(FilterState {
                    search_term: term,
                    ..FilterState::default()
                });

                let first: Vec<String> = controller
                    .visible()
                    .map(|i| i.sku().as_str().to_string())
                    .collect();
                let second: Vec<String> = controller
                    .visible()
                    .map(|i| i.sku().as_str().to_string())
                    .collect();
                prop_assert_eq!(first, second);
            }
        }
    }
}
