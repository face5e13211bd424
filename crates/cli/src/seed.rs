//! Embedded demo catalog.
//!
//! The admin page ships with seeded rows; the console starts with an
//! equivalent catalog unless `--empty` is passed. Every row goes through the
//! normal create path so the usual validation and coercion apply.

use anyhow::{Context, Result};
use serde::Deserialize;

use mejorsol_inventory::{InventoryController, ItemDraft};

#[derive(Debug, Deserialize)]
struct SeedItem {
    sku: String,
    name: String,
    category: String,
    stock: f64,
    minimum: f64,
    price: f64,
}

const DEMO_CATALOG: &str = r#"[
  {"sku": "PAN-450", "name": "Panel Solar 450W Monocristalino", "category": "paneles", "stock": 55, "minimum": 10, "price": 150000},
  {"sku": "PAN-550", "name": "Panel Solar 550W Bifacial", "category": "paneles", "stock": 18, "minimum": 8, "price": 210000},
  {"sku": "INV-3K", "name": "Inversor Híbrido 3kW", "category": "inversores", "stock": 12, "minimum": 5, "price": 450000},
  {"sku": "BAT-100", "name": "Batería de Litio 100Ah", "category": "baterias", "stock": 22, "minimum": 8, "price": 380000},
  {"sku": "BAT-200", "name": "Batería de Gel 200Ah", "category": "baterias", "stock": 2, "minimum": 4, "price": 290000},
  {"sku": "TRF-15", "name": "Transformador 15kVA", "category": "transformadores", "stock": 30, "minimum": 3, "price": 1200000}
]"#;

/// Controller pre-loaded with the demo catalog.
pub fn demo_controller() -> Result<InventoryController> {
    let seeds: Vec<SeedItem> =
        serde_json::from_str(DEMO_CATALOG).context("parsing demo catalog")?;

    let mut controller = InventoryController::default();
    for seed in seeds {
        let draft = ItemDraft {
            sku: seed.sku,
            name: seed.name,
            category: seed.category,
            stock: seed.stock.to_string(),
            minimum: seed.minimum.to_string(),
            price: seed.price.to_string(),
        };
        controller
            .create_item(&draft)
            .context("seeding demo catalog")?;
    }
    Ok(controller)
}
