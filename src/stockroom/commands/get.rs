use crate::commands::CmdResult;
use crate::error::{InventoryError, Result};
use crate::store::Inventory;

pub fn run(store: &Inventory, id: u64) -> Result<CmdResult> {
    let item = store.get(id).ok_or(InventoryError::NotFound(id))?;
    Ok(CmdResult::default().with_affected_items(vec![item]))
}
