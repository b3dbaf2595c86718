use crate::commands::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::{InventoryError, Result};
use crate::store::Inventory;

pub fn run(store: &mut Inventory, id: u64, update: ItemUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(current) = store.get(id) else {
        result.add_message(CmdMessage::warning(format!("Item {} not found", id)));
        return Ok(result);
    };
    if update.is_empty() {
        result.add_message(CmdMessage::info(format!("Item {} unchanged", id)));
        return Ok(result.with_affected_items(vec![current]));
    }
    if matches!(&update.name, Some(name) if name.trim().is_empty()) {
        return Err(InventoryError::Api("Name cannot be empty".into()));
    }

    store.update(id, update.merged_with(&current));
    let updated = store.get(id).ok_or(InventoryError::NotFound(id))?;
    result.add_message(CmdMessage::success(format!(
        "Updated item {}: {}",
        id, updated.name
    )));
    Ok(result.with_affected_items(vec![updated]).changed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Item;

    #[test]
    fn updates_given_fields_in_place() {
        let mut store = Inventory::new();
        store.add(Item::new("Bolt", "Hardware", "Acme", 5, 0.1));
        let update = ItemUpdate {
            price: Some(0.2),
            ..ItemUpdate::default()
        };

        let result = run(&mut store, 1, update).unwrap();
        assert!(result.changed);
        let item = store.get(1).unwrap();
        assert_eq!(item.price, 0.2);
        assert_eq!(item.name, "Bolt");
        assert_eq!(item.quantity, 5);
    }

    #[test]
    fn unknown_id_warns() {
        let mut store = Inventory::new();
        let update = ItemUpdate {
            quantity: Some(1),
            ..ItemUpdate::default()
        };
        let result = run(&mut store, 4, update).unwrap();
        assert!(!result.changed);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Item 4 not found");
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut store = Inventory::new();
        store.add(Item::new("Bolt", "", "", 5, 0.1));
        let result = run(&mut store, 1, ItemUpdate::default()).unwrap();
        assert!(!result.changed);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = Inventory::new();
        store.add(Item::new("Bolt", "", "", 5, 0.1));
        let update = ItemUpdate {
            name: Some(String::new()),
            ..ItemUpdate::default()
        };
        assert!(run(&mut store, 1, update).is_err());
        assert_eq!(store.get(1).unwrap().name, "Bolt");
    }
}
