//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for contact operations, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (index text → [`DisplayIndex`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prompts, prints, or validates fields itself.
//!
//! `ContactsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ContactsApi<CsvStore>`
//! - Testing: `ContactsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::Contact;
use crate::store::DataStore;

pub struct ContactsApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ContactsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn list_contacts(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, contact)
    }

    pub fn edit_contact(
        &mut self,
        index: DisplayIndex,
        contact: Contact,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, index, contact)
    }

    pub fn delete_contact(&mut self, index: DisplayIndex) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Parses user text into a [`DisplayIndex`].
pub fn parse_index(input: &str) -> Result<DisplayIndex> {
    input.parse()
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::store::memory::fixtures::{alice, bob};
    use crate::store::memory::InMemoryStore;

    fn api() -> ContactsApi<InMemoryStore> {
        ContactsApi::new(InMemoryStore::new())
    }

    #[test]
    fn init_dispatches_to_store() {
        let mut api = api();
        api.init().unwrap();
        assert!(api.store().is_initialized());
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        api.add_contact(alice()).unwrap();
        let result = api.list_contacts().unwrap();
        assert_eq!(result.listed_contacts.len(), 1);
        assert_eq!(result.listed_contacts[0].contact, alice());
    }

    #[test]
    fn edit_and_delete_take_display_indexes() {
        let mut api = api();
        api.add_contact(alice()).unwrap();
        api.add_contact(alice()).unwrap();

        api.edit_contact(parse_index("2").unwrap(), bob()).unwrap();
        assert_eq!(api.store().contacts(), &[alice(), bob()]);

        api.delete_contact(parse_index(" 1 ").unwrap()).unwrap();
        assert_eq!(api.store().contacts(), &[bob()]);
    }

    #[test]
    fn parse_index_rejects_text() {
        assert!(matches!(
            parse_index("two"),
            Err(ContactsError::InvalidNumber(_))
        ));
    }
}
