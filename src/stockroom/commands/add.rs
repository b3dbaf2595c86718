use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::{Item, ItemFields};
use crate::store::Inventory;

pub fn run(store: &mut Inventory, fields: ItemFields) -> Result<CmdResult> {
    if fields.name.trim().is_empty() {
        return Err(InventoryError::Api("Name cannot be empty".into()));
    }

    let added = store.add(Item::from(fields));
    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!(
        "Added with ID {}: {}",
        added.id, added.name
    )));
    Ok(result.with_affected_items(vec![added]))
}
