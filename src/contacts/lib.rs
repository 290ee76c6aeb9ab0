//! # Contacts Architecture
//!
//! Contacts is a small contact book kept in a CSV file. The core is a library;
//! the interactive menu is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, re-prompting on bad input            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / edit / delete / list / init                        │
//! │  - Validates whole records before any write                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Contacts have no ID. They are addressed by their 1-based position in the
//! latest listing; see [`index`].
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never reads stdin, writes stdout or exits the
//! process. User mistakes come back as recoverable [`error::ContactsError`]
//! variants and the CLI decides how to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Contact` record
//! - [`index`]: Display indexes
//! - [`validation`]: Name, email and phone checks
//! - [`config`]: Runtime configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;
