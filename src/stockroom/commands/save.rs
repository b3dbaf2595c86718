use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use std::path::Path;

pub fn run(store: &Inventory, path: &Path) -> Result<CmdResult> {
    store.save(path)?;
    let mut result = CmdResult::default().with_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!("Saved to {}", path.display())));
    Ok(result)
}
