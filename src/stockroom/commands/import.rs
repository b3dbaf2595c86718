use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use std::path::Path;

pub fn run(store: &mut Inventory, path: &Path) -> Result<CmdResult> {
    let report = store.import_merge(path)?;

    let loaded = report.loaded;

    let mut result = CmdResult::default().with_path(path.to_path_buf());
    result.add_report(report);
    result.add_message(CmdMessage::success(format!(
        "Imported {} item(s) from {}",
        loaded,
        path.display()
    )));
    if loaded > 0 {
        result = result.changed();
    }
    Ok(result)
}
