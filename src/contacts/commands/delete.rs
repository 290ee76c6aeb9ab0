use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;
use tracing::info;

use super::helpers::load_with_position;

pub fn run<S: DataStore>(store: &mut S, index: DisplayIndex) -> Result<CmdResult> {
    let (mut contacts, position) = load_with_position(store, index)?;

    let removed = contacts.remove(position);
    store.rewrite_all(&contacts)?;
    info!(%index, "contact deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contact deleted successfully!"));
    Ok(result.with_affected_contacts(vec![removed]))
}
