//! # Storage Layer
//!
//! This module defines the storage abstraction for contacts. The [`DataStore`]
//! trait lets the commands work against different backends.
//!
//! ## Implementations
//!
//! - [`csv_file::CsvStore`]: Production storage in a single CSV file
//!   - Header row `Name,Email,Phone`, then one row per contact
//!   - Standard CSV quoting for fields holding commas, quotes or newlines
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Access Pattern
//!
//! There is no long-lived cache. Listing, editing and deleting read the whole
//! set, mutate it in memory and write the whole set back. Adding is the one
//! operation that appends.

use crate::error::Result;
use crate::model::Contact;

pub mod csv_file;
pub mod memory;

/// Abstract interface for contact storage.
pub trait DataStore {
    /// Create the store with just a header if it doesn't exist.
    /// Returns `true` when the store was created.
    fn initialize(&mut self) -> Result<bool>;

    /// All contacts in stored order. A missing store is initialized and read as empty.
    fn read_all(&mut self) -> Result<Vec<Contact>>;

    /// Add one contact after the existing ones without rewriting them
    fn append_one(&mut self, contact: &Contact) -> Result<()>;

    /// Replace the whole store with `contacts`, in the given order
    fn rewrite_all(&mut self, contacts: &[Contact]) -> Result<()>;
}
