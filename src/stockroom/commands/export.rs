use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Inventory;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Writes a snapshot to `path`, or to a timestamped file in the working
/// directory when no path is given.
pub fn run(store: &Inventory, path: Option<&Path>) -> Result<CmdResult> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_export_path(Local::now()),
    };
    store.export_all(&path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} item(s) to {}",
        store.len(),
        path.display()
    )));
    Ok(result.with_path(path))
}

fn default_export_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "inventory-export-{}.csv",
        now.format("%Y-%m-%d_%H-%M-%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn exports_to_given_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let mut store = Inventory::new();
        store.add(Item::new("Bolt", "", "", 5, 0.1));

        let result = run(&store, Some(&path)).unwrap();
        assert_eq!(result.path.as_deref(), Some(path.as_path()));
        assert!(!result.changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,Bolt,,,5,0.1\n");
    }

    #[test]
    fn default_name_is_timestamped() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            default_export_path(now),
            PathBuf::from("inventory-export-2024-03-09_14-05-07.csv")
        );
    }
}
