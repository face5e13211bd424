use mejorsol_core::{DomainError, DomainResult, Sku};

use crate::controller::InventoryController;
use crate::item::{InventoryItem, ItemDraft};
use crate::render;

/// What an open form is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit { sku: Sku },
}

/// Form fields addressable by name, for a UI to set individually.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormField {
    Sku,
    Name,
    Category,
    Stock,
    Minimum,
    Price,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { mode: ModalMode, draft: ItemDraft },
}

/// The create/edit modal form: `Closed → Open(mode) → Closed`.
///
/// Opening in create mode resets every field to its default (numerics "0");
/// opening in edit mode pre-populates from the target item and locks the SKU
/// field. A valid submit applies the operation and closes the form; an
/// invalid one leaves it open with the collection untouched. An explicit
/// close (cancel, close control, click outside) is the only other way back
/// to `Closed`.
#[derive(Debug, Clone, Default)]
pub struct ModalForm {
    state: ModalState,
}

impl ModalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// The SKU field is locked while editing an existing item.
    pub fn sku_locked(&self) -> bool {
        matches!(
            self.state,
            ModalState::Open {
                mode: ModalMode::Edit { .. },
                ..
            }
        )
    }

    pub fn draft(&self) -> Option<&ItemDraft> {
        match &self.state {
            ModalState::Open { draft, .. } => Some(draft),
            ModalState::Closed => None,
        }
    }

    pub fn open_create(&mut self) {
        self.state = ModalState::Open {
            mode: ModalMode::Create,
            draft: ItemDraft {
                stock: "0".into(),
                minimum: "0".into(),
                price: "0".into(),
                ..ItemDraft::default()
            },
        };
    }

    pub fn open_edit(&mut self, item: &InventoryItem) {
        let draft = ItemDraft {
            sku: item.sku().as_str().to_string(),
            name: item.name().to_string(),
            category: item.category().label().to_string(),
            stock: render::format_amount(item.stock()),
            minimum: render::format_amount(item.minimum()),
            price: render::format_amount(item.price()),
        };
        self.state = ModalState::Open {
            mode: ModalMode::Edit {
                sku: item.sku().clone(),
            },
            draft,
        };
    }

    /// Set one field of the open form. A closed form ignores the write, as
    /// does the SKU field while locked.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let ModalState::Open { mode, draft } = &mut self.state else {
            return;
        };
        let value = value.into();
        match field {
            FormField::Sku => {
                if matches!(mode, ModalMode::Create) {
                    draft.sku = value;
                }
            }
            FormField::Name => draft.name = value,
            FormField::Category => draft.category = value,
            FormField::Stock => draft.stock = value,
            FormField::Minimum => draft.minimum = value,
            FormField::Price => draft.price = value,
        }
    }

    /// Submit the open form against the controller. Success closes the form
    /// and returns the affected SKU; failure keeps the form open.
    pub fn submit(&mut self, controller: &mut InventoryController) -> DomainResult<Sku> {
        let ModalState::Open { mode, draft } = &self.state else {
            return Err(DomainError::validation("no open form to submit"));
        };
        let result = match mode {
            ModalMode::Create => controller.create_item(draft).map(|item| item.sku().clone()),
            ModalMode::Edit { sku } => controller
                .edit_item(sku, draft)
                .map(|item| item.sku().clone()),
        };
        let sku = result?;
        self.state = ModalState::Closed;
        Ok(sku)
    }

    /// Cancel / close control / click outside the modal body.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }
}
