use super::DataStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    initialized: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            initialized: true,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl DataStore for InMemoryStore {
    fn initialize(&mut self) -> Result<bool> {
        let created = !self.initialized;
        self.initialized = true;
        Ok(created)
    }

    fn read_all(&mut self) -> Result<Vec<Contact>> {
        self.initialize()?;
        Ok(self.contacts.clone())
    }

    fn append_one(&mut self, contact: &Contact) -> Result<()> {
        self.initialized = true;
        self.contacts.push(contact.clone());
        Ok(())
    }

    fn rewrite_all(&mut self, contacts: &[Contact]) -> Result<()> {
        self.initialized = true;
        self.contacts = contacts.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_all_initializes() {
        let mut store = InMemoryStore::new();
        assert!(!store.is_initialized());
        assert!(store.read_all().unwrap().is_empty());
        assert!(store.is_initialized());
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut store = InMemoryStore::with_contacts(vec![fixtures::alice()]);
        assert!(!store.initialize().unwrap());
        assert_eq!(store.contacts(), &[fixtures::alice()]);
    }
}
