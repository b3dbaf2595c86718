use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(store: &mut Inventory, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.remove(id) {
        result.add_message(CmdMessage::success(format!("Removed item {}", id)));
        result = result.changed();
    } else {
        result.add_message(CmdMessage::warning(format!("Item {} not found", id)));
    }
    Ok(result)
}
