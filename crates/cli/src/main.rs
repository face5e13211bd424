use clap::Parser;

use mejorsol_cli::{Cli, run};

fn main() {
    mejorsol_observability::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
