use std::process::ExitCode;

use anyhow::Context;

use stockroom_console::{Command, USAGE};
use stockroom_core::SystemClock;
use stockroom_inventory::InventoryStore;
use stockroom_products::CatalogConfig;

fn run(args: &[String]) -> anyhow::Result<()> {
    let command = Command::parse(args)?;
    if command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = CatalogConfig::from_env().context("failed to load catalog configuration")?;
    let store = InventoryStore::seeded(config, SystemClock);
    tracing::debug!(?command, products = store.len(), "running command");

    let output = command.execute(&store)?;
    let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

fn main() -> ExitCode {
    stockroom_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
