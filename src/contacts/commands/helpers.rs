use crate::error::Result;
use crate::index::{index_contacts, DisplayContact, DisplayIndex};
use crate::model::Contact;
use crate::store::DataStore;

pub fn indexed_contacts<S: DataStore>(store: &mut S) -> Result<Vec<DisplayContact>> {
    let contacts = store.read_all()?;
    Ok(index_contacts(contacts))
}

/// Reads the full set and resolves `index` against it, returning both so the
/// caller can mutate and write back.
pub fn load_with_position<S: DataStore>(
    store: &mut S,
    index: DisplayIndex,
) -> Result<(Vec<Contact>, usize)> {
    let contacts = store.read_all()?;
    let position = index.resolve(contacts.len())?;
    Ok((contacts, position))
}
