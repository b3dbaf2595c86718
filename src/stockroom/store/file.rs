use super::Inventory;
use crate::codec::{self, DecodePolicy, FieldIssue};
use crate::error::{InventoryError, Result};
use crate::model::Item;
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::Path;

/// A decode problem on a given line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIssue {
    pub line: usize,
    pub issue: FieldIssue,
    /// True when the decode policy dropped the whole line because of it.
    pub rejected: bool,
}

/// An incoming item that could not keep its id. `from == 0` means it had none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassignment {
    pub line: usize,
    pub from: u64,
    pub to: u64,
}

/// What happened while reading a source into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub reassigned: Vec<Reassignment>,
    pub issues: Vec<LineIssue>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.reassigned.is_empty() && self.issues.is_empty()
    }
}

impl Inventory {
    /// Replaces the whole collection with the items in `path`.
    ///
    /// The first occurrence of an id keeps it; unassigned and repeated ids get
    /// fresh ones above the largest id in the file. If the file cannot be read
    /// the store is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let text = read_source(path.as_ref())?;
        let (incoming, mut report) = decode_source(self.policy, &text);

        let mut next_id = incoming.iter().map(|(_, item)| item.id).max().unwrap_or(0).saturating_add(1);
        let mut seen = HashSet::with_capacity(incoming.len());
        let mut items = Vec::with_capacity(incoming.len());

        for (line, mut item) in incoming {
            if !item.is_assigned() || !seen.insert(item.id) {
                let from = item.id;
                item.id = next_id;
                next_id = next_id.saturating_add(1);
                report.reassigned.push(Reassignment {
                    line,
                    from,
                    to: item.id,
                });
            }
            items.push(item);
        }

        report.loaded = items.len();
        self.items = items;
        self.next_id = next_id;
        Ok(report)
    }

    /// Writes every item, one line each, truncating `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| InventoryError::io(path, e))?;
        codec::write_items(file, &self.items).map_err(|e| InventoryError::csv(path, e))
    }

    /// Appends the items in `path`, resolving id collisions against what is
    /// already stored. Nothing is appended if the file cannot be read.
    pub fn import_merge(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let text = read_source(path.as_ref())?;
        let (incoming, mut report) = decode_source(self.policy, &text);

        for (line, item) in incoming {
            let from = item.id;
            let to = self.merge_one(item);
            if from != to {
                report.reassigned.push(Reassignment { line, from, to });
            }
            report.loaded += 1;
        }
        Ok(report)
    }

    /// Snapshot of the collection to `path`. Same format as [`Inventory::save`].
    pub fn export_all(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save(path)
    }
}

/// Bytes that are not UTF-8 (a Latin-1 name, say) become U+FFFD instead of
/// failing the whole file.
fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| InventoryError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn decode_source(policy: DecodePolicy, text: &str) -> (Vec<(usize, Item)>, LoadReport) {
    let mut report = LoadReport::default();
    let mut items = Vec::new();

    for record in codec::records(text) {
        let decoded = codec::decode(&record.text);
        let admitted = policy.admits(&decoded);
        for issue in decoded.issues {
            report.issues.push(LineIssue {
                line: record.line,
                issue,
                rejected: !admitted,
            });
        }
        if admitted {
            items.push((record.line, decoded.item));
        } else {
            report.skipped += 1;
        }
    }
    (items, report)
}
