use core::str::FromStr;

use serde::{Deserialize, Serialize};

use mejorsol_core::{DomainError, DomainResult, Entity, Sku};

/// Product category, from the admin page's filter control.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Paneles,
    Baterias,
    Inversores,
    Transformadores,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Paneles,
        Category::Baterias,
        Category::Inversores,
        Category::Transformadores,
    ];

    /// Display label as the site shows it.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Paneles => "Paneles",
            Category::Baterias => "Baterías",
            Category::Inversores => "Inversores",
            Category::Transformadores => "Transformadores",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Case- and accent-insensitive: accepts both "Baterías" and "baterias".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s).as_str() {
            "paneles" => Ok(Category::Paneles),
            "baterias" => Ok(Category::Baterias),
            "inversores" => Ok(Category::Inversores),
            "transformadores" => Ok(Category::Transformadores),
            _ => Err(DomainError::validation(format!("unknown category: {s}"))),
        }
    }
}

fn fold_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Derived stock status. Never stored — always recomputed from the current
/// stock and minimum, so it cannot drift out of sync.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Low,
}

impl StockStatus {
    /// `Ok` iff `stock > minimum`; at or below the threshold is `Low`.
    pub fn of(stock: f64, minimum: f64) -> Self {
        if stock > minimum {
            StockStatus::Ok
        } else {
            StockStatus::Low
        }
    }

    /// Badge label as the site shows it.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "Bajo",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ok" => Ok(StockStatus::Ok),
            "bajo" | "low" => Ok(StockStatus::Low),
            _ => Err(DomainError::validation(format!("unknown status: {s}"))),
        }
    }
}

/// Direction of a row-level stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockDirection {
    In,
    Out,
}

impl StockDirection {
    pub fn label(&self) -> &'static str {
        match self {
            StockDirection::In => "Entrada",
            StockDirection::Out => "Salida",
        }
    }
}

/// Coerce raw numeric form input the way the admin page does: non-numeric or
/// negative input becomes 0 instead of an error.
pub fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Raw create/edit form input, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub stock: String,
    pub minimum: String,
    pub price: String,
}

impl ItemDraft {
    /// Parse the identity field. Only creation consults it; an edit keeps the
    /// item's existing SKU whatever the form carries.
    pub fn validated_sku(&self) -> DomainResult<Sku> {
        self.sku.parse()
    }

    /// Validate and coerce everything except the SKU.
    pub fn validate(&self) -> DomainResult<ItemFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let category = self.category.parse()?;
        Ok(ItemFields {
            name: name.to_string(),
            category,
            stock: coerce_amount(&self.stock),
            minimum: coerce_amount(&self.minimum),
            price: coerce_amount(&self.price),
        })
    }
}

/// Validated, coerced item fields — everything but the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub category: Category,
    pub stock: f64,
    pub minimum: f64,
    pub price: f64,
}

/// One row of inventory.
///
/// The SKU is immutable once created; all numeric fields are kept at or above
/// zero by construction (drafts are coerced, withdrawals clamp at zero).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    sku: Sku,
    name: String,
    category: Category,
    stock: f64,
    minimum: f64,
    price: f64,
}

impl InventoryItem {
    pub(crate) fn from_fields(sku: Sku, fields: ItemFields) -> Self {
        Self {
            sku,
            name: fields.name,
            category: fields.category,
            stock: fields.stock,
            minimum: fields.minimum,
            price: fields.price,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn stock(&self) -> f64 {
        self.stock
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::of(self.stock, self.minimum)
    }

    /// Replace everything but the SKU.
    pub(crate) fn apply_fields(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.category = fields.category;
        self.stock = fields.stock;
        self.minimum = fields.minimum;
        self.price = fields.price;
    }

    pub(crate) fn receive(&mut self, quantity: f64) {
        self.stock += quantity;
    }

    /// Withdrawals clamp at a floor of zero; stock can never go negative.
    pub(crate) fn withdraw(&mut self, quantity: f64) {
        self.stock = (self.stock - quantity).max(0.0);
    }
}

impl Entity for InventoryItem {
    type Id = Sku;

    fn id(&self) -> &Sku {
        &self.sku
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_amount_clamps_negative_and_garbage_to_zero() {
        assert_eq!(coerce_amount("12.5"), 12.5);
        assert_eq!(coerce_amount(" 7 "), 7.0);
        assert_eq!(coerce_amount("-3"), 0.0);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("NaN"), 0.0);
        assert_eq!(coerce_amount("inf"), 0.0);
    }

    #[test]
    fn category_parses_accented_and_plain_labels() {
        assert_eq!("Baterías".parse::<Category>().unwrap(), Category::Baterias);
        assert_eq!("baterias".parse::<Category>().unwrap(), Category::Baterias);
        assert_eq!("PANELES".parse::<Category>().unwrap(), Category::Paneles);
        assert!("Cables".parse::<Category>().is_err());
    }

    #[test]
    fn status_is_low_at_exactly_the_minimum() {
        assert_eq!(StockStatus::of(10.0, 10.0), StockStatus::Low);
        assert_eq!(StockStatus::of(10.1, 10.0), StockStatus::Ok);
        assert_eq!(StockStatus::of(0.0, 0.0), StockStatus::Low);
    }

    #[test]
    fn draft_validation_rejects_blank_name() {
        let draft = ItemDraft {
            sku: "PAN-450".into(),
            name: "   ".into(),
            category: "Paneles".into(),
            ..ItemDraft::default()
        };
        match draft.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn draft_validation_coerces_numeric_fields() {
        let draft = ItemDraft {
            sku: "PAN-450".into(),
            name: "Panel Solar 450W".into(),
            category: "Paneles".into(),
            stock: "-5".into(),
            minimum: "x".into(),
            price: "150000".into(),
        };
        let fields = draft.validate().unwrap();
        assert_eq!(fields.stock, 0.0);
        assert_eq!(fields.minimum, 0.0);
        assert_eq!(fields.price, 150000.0);
    }

    #[test]
    fn withdraw_floors_at_zero() {
        let fields = ItemFields {
            name: "Panel".into(),
            category: Category::Paneles,
            stock: 5.0,
            minimum: 2.0,
            price: 100.0,
        };
        let mut item = InventoryItem::from_fields("P1".parse().unwrap(), fields);
        item.withdraw(8.0);
        assert_eq!(item.stock(), 0.0);
        assert_eq!(item.status(), StockStatus::Low);
    }
}
