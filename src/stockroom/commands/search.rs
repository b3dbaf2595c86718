use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(store: &Inventory, term: &str) -> Result<CmdResult> {
    let matches = store.search_by_name(term);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matches."));
    }
    Ok(result.with_listed_items(matches))
}
