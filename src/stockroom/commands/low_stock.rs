use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(store: &Inventory, threshold: i64) -> Result<CmdResult> {
    let low = store.low_stock(threshold);
    let mut result = CmdResult::default();
    if low.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No items at or below {}.",
            threshold
        )));
    }
    Ok(result.with_listed_items(low))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn lists_items_at_or_below_threshold() {
        let mut store = Inventory::new();
        store.add(Item::new("Bolt", "", "", 5, 0.1));
        store.add(Item::new("Nut", "", "", 2, 0.05));

        let result = run(&store, 3).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].name, "Nut");

        let none = run(&store, 1).unwrap();
        assert_eq!(none.messages[0].content, "No items at or below 1.");
    }
}
