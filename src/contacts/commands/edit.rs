use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::Contact;
use crate::store::DataStore;
use crate::validation::validate_contact;
use tracing::info;

use super::helpers::load_with_position;

/// Replaces the contact at `index` and rewrites the whole store.
pub fn run<S: DataStore>(
    store: &mut S,
    index: DisplayIndex,
    contact: Contact,
) -> Result<CmdResult> {
    validate_contact(&contact)?;
    let (mut contacts, position) = load_with_position(store, index)?;

    contacts[position] = contact.clone();
    store.rewrite_all(&contacts)?;
    info!(%index, "contact updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contact updated successfully!"));
    Ok(result.with_affected_contacts(vec![contact]))
}
