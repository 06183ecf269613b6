use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemStore;
use tracing::{info, warn};

/// Hard delete. Removing an id that is not there succeeds with a warning.
pub fn run<S: ItemStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.remove(id)? {
        info!(id, "removed item from fridge");
    } else {
        warn!(id, "nothing to remove");
        result.add_message(CmdMessage::warning(format!(
            "Item {id:03} was not in the fridge"
        )));
    }
    Ok(result)
}
