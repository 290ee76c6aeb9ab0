use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.initialize()? {
        result.add_message(CmdMessage::info("Created a new contact store."));
    }
    Ok(result)
}
