use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use std::path::Path;

/// Replaces the store with the contents of `path`.
pub fn run(store: &mut Inventory, path: &Path) -> Result<CmdResult> {
    let report = store.load(path)?;

    let loaded = report.loaded;

    let mut result = CmdResult::default().with_path(path.to_path_buf()).changed();
    result.add_report(report);
    result.add_message(CmdMessage::success(format!(
        "Loaded {} item(s) from {}",
        loaded,
        path.display()
    )));
    Ok(result)
}
