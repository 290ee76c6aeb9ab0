use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::indexed_contacts;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let listed = indexed_contacts(store)?;
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_listed_contacts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::{alice, bob, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_reports_no_contacts() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No contacts found.")]);
    }

    #[test]
    fn lists_in_stored_order() {
        let mut fixture = StoreFixture::new().with_contact(alice()).with_contact(bob());
        let result = run(&mut fixture.store).unwrap();

        assert!(result.messages.is_empty());
        assert_eq!(result.listed_contacts.len(), 2);
        assert_eq!(result.listed_contacts[0].index, DisplayIndex::new(1));
        assert_eq!(result.listed_contacts[0].contact, alice());
        assert_eq!(result.listed_contacts[1].index, DisplayIndex::new(2));
        assert_eq!(result.listed_contacts[1].contact, bob());
    }
}
