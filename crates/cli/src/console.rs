//! Interactive admin console: a text-table renderer over the controller's
//! visible rows, plus the command loop driving create/edit/delete, stock
//! movements and CSV export.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use mejorsol_core::Sku;
use mejorsol_inventory::{
    DisplayRow, FormField, InventoryController, ItemDraft, ModalForm, StockDirection,
};

use crate::prompts::Prompts;

/// Outcome of one console command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Console<P: Prompts> {
    controller: InventoryController,
    modal: ModalForm,
    prompts: P,
    export_path: PathBuf,
}

impl<P: Prompts> Console<P> {
    pub fn new(controller: InventoryController, prompts: P, export_path: PathBuf) -> Self {
        Self {
            controller,
            modal: ModalForm::new(),
            prompts,
            export_path,
        }
    }

    pub fn controller(&self) -> &InventoryController {
        &self.controller
    }

    pub fn run(&mut self) -> Result<()> {
        println!("Inventario MejorSol — escriba `ayuda` para ver los comandos.");
        self.print_table();
        loop {
            let Some(line) = self.prompts.line("> ") else {
                break;
            };
            match self.handle(line.trim())? {
                Flow::Quit => break,
                Flow::Continue => {}
            }
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Result<Flow> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "ayuda" | "help" => self.print_help(),
            "lista" => self.print_table(),
            "buscar" => self.set_search(rest),
            "categoria" | "categoría" => self.set_category(rest),
            "estado" => self.set_status(rest),
            "nuevo" => self.create_flow(),
            "editar" => self.edit_flow(rest),
            "eliminar" => self.delete_flow(rest),
            "entrada" => self.movement_flow(rest, StockDirection::In),
            "salida" => self.movement_flow(rest, StockDirection::Out),
            "exportar" => self.export_flow(rest)?,
            "salir" | "quit" => return Ok(Flow::Quit),
            other => println!("comando desconocido: {other} (escriba `ayuda`)"),
        }
        Ok(Flow::Continue)
    }

    fn set_search(&mut self, term: &str) {
        let mut filter = self.controller.filter().clone();
        filter.search_term = term.to_string();
        self.controller.set_filter(filter);
        self.print_table();
    }

    fn set_category(&mut self, rest: &str) {
        let mut filter = self.controller.filter().clone();
        if rest.is_empty() || rest == "-" {
            filter.category = None;
        } else {
            match rest.parse() {
                Ok(category) => filter.category = Some(category),
                Err(e) => {
                    println!("  ✗ {e}");
                    return;
                }
            }
        }
        self.controller.set_filter(filter);
        self.print_table();
    }

    fn set_status(&mut self, rest: &str) {
        let mut filter = self.controller.filter().clone();
        if rest.is_empty() || rest == "-" {
            filter.status = None;
        } else {
            match rest.parse() {
                Ok(status) => filter.status = Some(status),
                Err(e) => {
                    println!("  ✗ {e}");
                    return;
                }
            }
        }
        self.controller.set_filter(filter);
        self.print_table();
    }

    fn parse_sku(&self, raw: &str) -> Option<Sku> {
        match raw.parse() {
            Ok(sku) => Some(sku),
            Err(e) => {
                println!("  ✗ {e}");
                None
            }
        }
    }

    fn create_flow(&mut self) {
        self.modal.open_create();
        self.form_flow();
    }

    fn edit_flow(&mut self, rest: &str) {
        let Some(sku) = self.parse_sku(rest) else {
            return;
        };
        let Some(item) = self.controller.collection().get(&sku) else {
            println!("  ✗ no existe el producto {sku}");
            return;
        };
        self.modal.open_edit(item);
        self.form_flow();
    }

    /// Fill the form and submit; invalid input keeps the form open for a
    /// retry until the user declines.
    fn form_flow(&mut self) {
        loop {
            self.fill_form();
            match self.modal.submit(&mut self.controller) {
                Ok(sku) => {
                    println!("  ✓ guardado {sku}");
                    self.print_table();
                    break;
                }
                Err(e) => {
                    println!("  ✗ {e}");
                    if !self.prompts.confirm("¿Reintentar?") {
                        self.modal.close();
                        break;
                    }
                }
            }
        }
    }

    /// Prompt for each field; empty input keeps the current value, and the
    /// SKU prompt is skipped entirely while locked (edit mode).
    fn fill_form(&mut self) {
        const FIELDS: [(FormField, &str); 6] = [
            (FormField::Sku, "SKU"),
            (FormField::Name, "Nombre"),
            (FormField::Category, "Categoría"),
            (FormField::Stock, "Stock"),
            (FormField::Minimum, "Mínimo"),
            (FormField::Price, "Precio"),
        ];
        for (field, label) in FIELDS {
            if matches!(field, FormField::Sku) && self.modal.sku_locked() {
                continue;
            }
            let current = self
                .modal
                .draft()
                .map(|draft| draft_value(draft, field).to_string())
                .unwrap_or_default();
            let Some(input) = self.prompts.line(&format!("  {label} [{current}]: ")) else {
                return;
            };
            let input = input.trim();
            if !input.is_empty() {
                self.modal.set_field(field, input);
            }
        }
    }

    fn delete_flow(&mut self, rest: &str) {
        let Some(sku) = self.parse_sku(rest) else {
            return;
        };
        let Some(item) = self.controller.collection().get(&sku) else {
            println!("  ✗ no existe el producto {sku}");
            return;
        };
        let message = format!("¿Eliminar producto {} ({})?", item.sku(), item.name());
        if !self.prompts.confirm(&message) {
            println!("  cancelado");
            return;
        }
        match self.controller.delete_item(&sku) {
            Ok(removed) => {
                println!("  ✓ eliminado {}", removed.sku());
                self.print_table();
            }
            Err(e) => println!("  ✗ {e}"),
        }
    }

    fn movement_flow(&mut self, rest: &str, direction: StockDirection) {
        let Some(sku) = self.parse_sku(rest) else {
            return;
        };
        let prompt = match direction {
            StockDirection::In => "Cantidad de entrada: ",
            StockDirection::Out => "Cantidad de salida: ",
        };
        let Some(quantity) = self.prompts.quantity(prompt) else {
            return;
        };
        match self.controller.move_stock(&sku, direction, quantity) {
            Ok(item) => {
                let row = DisplayRow::from_item(item);
                println!(
                    "  ✓ {} {}: stock ahora {} ({})",
                    direction.label(),
                    row.sku,
                    row.stock,
                    row.status
                );
                self.print_table();
            }
            Err(e) => println!("  ✗ {e}"),
        }
    }

    fn export_flow(&mut self, rest: &str) -> Result<()> {
        let path = if rest.is_empty() {
            self.export_path.clone()
        } else {
            PathBuf::from(rest)
        };
        let csv = self.controller.export_csv()?;
        let rows = csv.lines().count().saturating_sub(1);
        fs::write(&path, csv).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), rows, "exported visible rows");
        println!("  ✓ exportadas {rows} filas a {}", path.display());
        Ok(())
    }

    fn print_table(&self) {
        let rows: Vec<DisplayRow> = self.controller.visible().map(DisplayRow::from_item).collect();
        let filter = self.controller.filter();

        println!();
        println!(
            "{:<10} {:<32} {:<16} {:>8} {:>8} {:<6} {:>12}",
            "SKU", "Producto", "Categoría", "Stock", "Mínimo", "Estado", "Precio"
        );
        println!("{}", "-".repeat(100));
        for row in &rows {
            println!(
                "{:<10} {:<32} {:<16} {:>8} {:>8} {:<6} {:>12}",
                row.sku, row.name, row.category, row.stock, row.minimum, row.status, row.price
            );
        }
        println!(
            "{} de {} productos visibles",
            rows.len(),
            self.controller.collection().len()
        );
        if !filter.search_term.is_empty() || filter.category.is_some() || filter.status.is_some() {
            println!("(filtro activo — `buscar`, `categoria -`, `estado -` para limpiar)");
        }
        println!();
    }

    fn print_help(&self) {
        println!("comandos:");
        println!("  lista                  mostrar la tabla");
        println!("  buscar <texto>         filtrar por SKU o nombre (vacío limpia)");
        println!("  categoria <nombre|->   filtrar por categoría");
        println!("  estado <ok|bajo|->     filtrar por estado de stock");
        println!("  nuevo                  crear un producto (formulario)");
        println!("  editar <SKU>           editar un producto (el SKU no cambia)");
        println!("  eliminar <SKU>         eliminar, previa confirmación");
        println!("  entrada <SKU>          registrar entrada de stock");
        println!("  salida <SKU>           registrar salida de stock");
        println!("  exportar [ruta]        exportar las filas visibles a CSV");
        println!("  salir                  terminar");
    }
}

fn draft_value(draft: &ItemDraft, field: FormField) -> &str {
    match field {
        FormField::Sku => &draft.sku,
        FormField::Name => &draft.name,
        FormField::Category => &draft.category,
        FormField::Stock => &draft.stock,
        FormField::Minimum => &draft.minimum,
        FormField::Price => &draft.price,
    }
}
