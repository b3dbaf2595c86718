//! # Command Layer
//!
//! One module per operation. Each `run` takes the store (and whatever else it
//! needs) as plain arguments, calls into [`Inventory`], and returns a
//! [`CmdResult`]: the items involved plus leveled messages for the UI.
//!
//! The store answers with `bool` / `Option` for not-found; commands turn that
//! into a warning message rather than an error, so a UI can show it and carry
//! on. Only I/O failures and invalid input come back as `Err`.
//!
//! [`Inventory`]: crate::store::Inventory

use crate::model::{Item, ItemFields};
use crate::store::LoadReport;
use crate::view::Page;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod load;
pub mod low_stock;
pub mod remove;
pub mod save;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created, changed or looked up by the command
    pub affected_items: Vec<Item>,
    /// Items to show as a table (search, low-stock)
    pub listed_items: Vec<Item>,
    /// A page of the full listing
    pub page: Option<Page>,
    /// Outcome of reading a file (load, import)
    pub report: Option<LoadReport>,
    /// Key/value pairs for `config` output
    pub config_values: Vec<(String, String)>,
    pub path: Option<PathBuf>,
    /// True when the in-memory collection changed
    pub changed: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }

    /// Warnings for decode issues, info lines for reassigned ids. The report
    /// is kept on the result.
    pub fn add_report(&mut self, report: LoadReport) {
        for issue in &report.issues {
            let outcome = if issue.rejected {
                "line skipped"
            } else {
                "set to 0"
            };
            self.add_message(CmdMessage::warning(format!(
                "Line {}: {} ({})",
                issue.line, issue.issue, outcome
            )));
        }
        for r in &report.reassigned {
            let text = if r.from == 0 {
                format!("Line {}: no id, stored as {}", r.line, r.to)
            } else {
                format!("Line {}: id {} already taken, stored as {}", r.line, r.from, r.to)
            };
            self.add_message(CmdMessage::info(text));
        }
        self.report = Some(report);
    }
}

/// Field-by-field changes for `update`; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.supplier.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }

    pub fn merged_with(self, current: &Item) -> ItemFields {
        let current = current.fields();
        ItemFields {
            name: self.name.unwrap_or(current.name),
            category: self.category.unwrap_or(current.category),
            supplier: self.supplier.unwrap_or(current.supplier),
            quantity: self.quantity.unwrap_or(current.quantity),
            price: self.price.unwrap_or(current.price),
        }
    }
}
