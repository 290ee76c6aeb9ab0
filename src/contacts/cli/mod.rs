//! # CLI Layer
//!
//! This module is **one possible UI client** for contacts: an interactive menu
//! over stdin/stdout. It is the only place that reads user input or prints.
//!
//! - `shell`: the menu state machine and per-operation handlers
//! - `prompt`: line input and the re-prompting field loop
//! - `print`: menu, listings and leveled messages
//!
//! No process arguments are parsed. The store location comes from
//! [`ContactsConfig`] defaults.

mod print;
mod prompt;
mod shell;

use contacts::api::ContactsApi;
use contacts::config::ContactsConfig;
use contacts::error::Result;
use contacts::store::csv_file::CsvStore;
use std::io;
use tracing::debug;

pub const INTERRUPTED_MESSAGE: &str = "Program interrupted. Goodbye!";

pub fn run() -> Result<shell::SessionEnd> {
    let config = ContactsConfig::default();
    debug!(path = %config.store_path().display(), "using contact store");

    let api = ContactsApi::new(CsvStore::from_config(&config));
    // stdout stays unlocked so the interrupt handler can still print.
    let mut shell = shell::Shell::new(api, io::stdin().lock(), io::stdout());
    shell.run()
}
