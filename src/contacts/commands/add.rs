use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;
use crate::validation::validate_contact;

pub fn run<S: DataStore>(store: &mut S, contact: Contact) -> Result<CmdResult> {
    validate_contact(&contact)?;
    store.append_one(&contact)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contact added successfully!"));
    Ok(result.with_affected_contacts(vec![contact]))
}
