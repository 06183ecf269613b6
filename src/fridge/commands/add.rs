use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewItem;
use crate::store::ItemStore;
use tracing::info;

/// Validates, stores, and reads back the new item so callers see the assigned id
/// and timestamp.
pub fn run<S: ItemStore>(store: &mut S, new_item: &NewItem) -> Result<CmdResult> {
    new_item.validate()?;

    let id = store.add(
        new_item.name.trim(),
        new_item.quantity,
        new_item.expiration_date,
    )?;
    let item = store.get_by_id(id)?;
    info!(id = item.id, name = %item.name, quantity = item.quantity, "added item to fridge");

    let mut result = CmdResult::default().with_affected_items(vec![item]);
    result.add_message(CmdMessage::success("Added item :"));
    Ok(result)
}
