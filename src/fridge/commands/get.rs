use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Collection;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S, id: i64) -> Result<CmdResult> {
    let item = store.get_by_id(id)?;
    Ok(CmdResult::default().with_listed_items(Collection::new(vec![item])))
}
