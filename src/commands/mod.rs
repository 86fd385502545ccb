//! Command dispatch and handlers.
//!
//! Handlers return the text to print so they can be exercised against any
//! [`InventoryStore`] without capturing stdout.

pub mod category;
pub mod preview;
pub mod product;
mod table;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::ports::inventory::InventoryStore;
use crate::store::YamlStore;

/// Dispatch a parsed command against the YAML store chosen by `--store` or
/// the settings, and print its output.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli, settings: &Settings) -> Result<(), String> {
    let settings = settings.clone().with_store(cli.store.as_deref());
    let ctx = ServiceContext::live();
    let store = YamlStore::new(&ctx, &settings.store_root);
    debug!(path = %store.path().display(), "using inventory");

    let output = dispatch_with_store(&cli.command, &store)?;
    print!("{output}");
    Ok(())
}

/// Run a command against `store` and return what it would print.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_store<S: InventoryStore + ?Sized>(
    command: &Command,
    store: &S,
) -> Result<String, String> {
    match command {
        Command::Category(command) => category::run(store, command),
        Command::Product(command) => product::run(store, command),
        Command::Preview { name } => preview::run(store, name),
    }
}
