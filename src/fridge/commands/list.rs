use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Collection;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S) -> Result<CmdResult> {
    let items = store.list_all()?;
    Ok(CmdResult::default().with_listed_items(Collection::new(items)))
}
