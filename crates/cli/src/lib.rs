//! `mejorsol-cli` — interactive admin console for the MejorSol inventory.

pub mod console;
pub mod prompts;
pub mod seed;

use std::path::PathBuf;

use clap::Parser;

use mejorsol_inventory::InventoryController;

use crate::console::Console;
use crate::prompts::StdinPrompts;

#[derive(Debug, Parser)]
#[command(
    name = "mejorsol-admin",
    about = "Consola de administración del inventario MejorSol"
)]
pub struct Cli {
    /// Start with an empty collection instead of the demo catalog.
    #[arg(long)]
    pub empty: bool,

    /// Default path used by `exportar` when no path is given.
    #[arg(long, default_value = "inventario.csv")]
    pub export_path: PathBuf,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let controller = if cli.empty {
        InventoryController::default()
    } else {
        seed::demo_controller()?
    };

    let mut console = Console::new(controller, StdinPrompts, cli.export_path);
    console.run()
}
