//! CSV export of the visible rows.

use anyhow::Result;

use crate::item::InventoryItem;
use crate::render;

/// Fixed column order of the export.
const HEADER: [&str; 7] = [
    "sku", "name", "category", "stock", "minimum", "status", "price",
];

/// Serialize a header line plus one line per given row.
///
/// Only rows the caller passes in are exported — the export reflects exactly
/// what the user currently sees, not the whole collection. The writer quotes
/// fields when needed, and numeric fields are written unformatted so no
/// thousands separators can leak into the output.
pub fn export_csv<'a>(rows: impl Iterator<Item = &'a InventoryItem>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for item in rows {
        let stock = render::format_amount(item.stock());
        let minimum = render::format_amount(item.minimum());
        let price = render::format_amount(item.price());
        writer.write_record([
            item.sku().as_str(),
            item.name(),
            item.category().label(),
            stock.as_str(),
            minimum.as_str(),
            item.status().label(),
            price.as_str(),
        ])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}
