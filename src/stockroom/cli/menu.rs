//! Interactive text menu.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so it runs the same against a terminal or a test buffer. End of input is
//! treated as "exit without saving". Settings are written back to the config
//! file whenever the menu ends.

use super::commands::render_result;
use super::render::{render_messages, render_page};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use stockroom::api::{CmdMessage, InventoryApi, ItemUpdate};
use stockroom::error::{InventoryError, Result};
use stockroom::model::ItemFields;
use stockroom::view::SortField;
use tracing::{debug, warn};

const MAIN_MENU: &str = "\
1) List all items
2) Add item
3) Update item
4) Remove item
5) Search by name
6) Low-stock report
7) Import CSV
8) Export CSV
9) Save and Exit
10) Settings
0) Exit without saving
";

const SORT_MENU: &str = "Sort by: 1) id 2) name 3) category 4) supplier 5) quantity 6) price\n";

enum Flow {
    Continue,
    Exit,
}

struct Menu<'a, R, W> {
    api: &'a mut InventoryApi,
    input: R,
    out: W,
}

pub fn run<R: BufRead, W: Write>(api: &mut InventoryApi, input: R, out: W) -> Result<()> {
    let mut menu = Menu { api, input, out };
    let outcome = menu.main_loop();

    if let Err(e) = menu.api.save_settings() {
        warn!(error = %e, "could not write settings");
        menu.say(&[CmdMessage::error(format!("Could not save settings: {}", e))])?;
    }
    outcome
}

fn terminal(e: io::Error) -> InventoryError {
    InventoryError::io("<terminal>", e)
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn main_loop(&mut self) -> Result<()> {
        loop {
            self.header()?;
            self.write(MAIN_MENU)?;
            let Some(choice) = self.line("Select: ")? else {
                return Ok(());
            };
            let flow = match choice.trim() {
                "1" => self.list()?,
                "2" => self.add()?,
                "3" => self.update()?,
                "4" => self.remove()?,
                "5" => self.search()?,
                "6" => self.low_stock()?,
                "7" => self.import()?,
                "8" => self.export()?,
                "9" => {
                    let saved = self.api.save();
                    self.report(saved)?;
                    Flow::Exit
                }
                "10" => self.settings()?,
                "0" => Flow::Exit,
                _ => {
                    self.write("Unknown option.\n")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn header(&mut self) -> Result<()> {
        let settings = self.api.settings();
        let text = format!(
            "\n=== Inventory Management ===\nData file: {} | Page size: {} | Autosave: {} | Sort: {}\n\n",
            settings.data_file.display(),
            settings.page_size,
            if settings.autosave { "On" } else { "Off" },
            settings.sort_field
        );
        self.write(&text)
    }

    fn list(&mut self) -> Result<Flow> {
        let mut number = 1;
        loop {
            let page = match self.api.list(None, None, number)?.page {
                Some(page) => page,
                None => return Ok(Flow::Continue),
            };
            self.write(&render_page(&page))?;
            if page.total == 0 {
                return Ok(Flow::Continue);
            }

            let prompt = "(Enter=next, b=prev, s=sort, g=goto, q=quit) Command: ";
            let Some(cmd) = self.line(prompt)? else {
                return Ok(Flow::Exit);
            };
            match cmd.trim() {
                "" => {
                    if page.number >= page.pages {
                        return Ok(Flow::Continue);
                    }
                    number = page.number + 1;
                }
                "b" => number = page.number.saturating_sub(1).max(1),
                "q" => return Ok(Flow::Continue),
                "g" => match self.int("Goto page #: ")? {
                    Some(n) if n >= 1 && (n as usize) <= page.pages => number = n as usize,
                    Some(_) => number = page.number,
                    None => return Ok(Flow::Exit),
                },
                "s" => {
                    self.write(SORT_MENU)?;
                    let Some(opt) = self.line("Choose: ")? else {
                        return Ok(Flow::Exit);
                    };
                    if let Some(field) = sort_choice(opt.trim()) {
                        self.api.settings_mut().sort_field = field;
                    }
                    number = 1;
                }
                _ => number = page.number,
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = self.line("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.line("Category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(supplier) = self.line("Supplier: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.int("Quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.number("Price: ")? else {
            return Ok(Flow::Exit);
        };

        let added = self.api.add(ItemFields {
            name,
            category,
            supplier,
            quantity,
            price,
        });
        self.report(added)?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(id) = self.id("ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        let current = match self.api.get(id) {
            Ok(result) => match result.affected_items.into_iter().next() {
                Some(item) => item,
                None => return Ok(Flow::Continue),
            },
            Err(InventoryError::NotFound(_)) => {
                self.write("Item not found.\n")?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        let mut update = ItemUpdate::default();
        let Some(name) = self.line(&format!("Name ({}): ", current.name))? else {
            return Ok(Flow::Exit);
        };
        update.name = non_empty(name);
        let Some(category) = self.line(&format!("Category ({}): ", current.category))? else {
            return Ok(Flow::Exit);
        };
        update.category = non_empty(category);
        let Some(supplier) = self.line(&format!("Supplier ({}): ", current.supplier))? else {
            return Ok(Flow::Exit);
        };
        update.supplier = non_empty(supplier);
        match self.optional(&format!("Quantity ({}): ", current.quantity), "integer")? {
            Some(value) => update.quantity = value,
            None => return Ok(Flow::Exit),
        }
        match self.optional(&format!("Price ({:.2}): ", current.price), "number")? {
            Some(value) => update.price = value,
            None => return Ok(Flow::Exit),
        }

        let updated = self.api.update(id, update);
        self.report(updated)?;
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(id) = self.id("ID to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let removed = self.api.remove(id);
        self.report(removed)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(term) = self.line("Search term: ")? else {
            return Ok(Flow::Exit);
        };
        let found = self.api.search(&term);
        self.report(found)?;
        Ok(Flow::Continue)
    }

    fn low_stock(&mut self) -> Result<Flow> {
        let Some(threshold) = self.int("Low-stock threshold: ")? else {
            return Ok(Flow::Exit);
        };
        let low = self.api.low_stock(threshold);
        self.report(low)?;
        Ok(Flow::Continue)
    }

    fn import(&mut self) -> Result<Flow> {
        let Some(path) = self.line("CSV path to import: ")? else {
            return Ok(Flow::Exit);
        };
        let imported = self.api.import(Path::new(path.trim()));
        self.report(imported)?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let Some(path) = self.line("CSV path to export (blank for default): ")? else {
            return Ok(Flow::Exit);
        };
        let path = non_empty(path.trim().to_string()).map(PathBuf::from);
        let exported = self.api.export(path.as_deref());
        self.report(exported)?;
        Ok(Flow::Continue)
    }

    fn settings(&mut self) -> Result<Flow> {
        loop {
            self.header()?;
            let settings = self.api.settings();
            let text = format!(
                "Settings\n1) Data file: {}\n2) Page size: {}\n3) Autosave: {}\n4) Reload data file now\n5) Config file: {}\n0) Back\n",
                settings.data_file.display(),
                settings.page_size,
                if settings.autosave { "On" } else { "Off" },
                self.api.config_path().display()
            );
            self.write(&text)?;

            let Some(choice) = self.line("Choose: ")? else {
                return Ok(Flow::Exit);
            };
            match choice.trim() {
                "1" => {
                    let Some(path) = self.line("New data file path: ")? else {
                        return Ok(Flow::Exit);
                    };
                    let path = path.trim();
                    if !path.is_empty() {
                        self.switch_data_file(PathBuf::from(path))?;
                    }
                }
                "2" => {
                    let Some(size) = self.int("New page size: ")? else {
                        return Ok(Flow::Exit);
                    };
                    self.api
                        .settings_mut()
                        .set_page_size(size.max(1) as usize);
                }
                "3" => {
                    let autosave = !self.api.settings().autosave;
                    self.api.settings_mut().autosave = autosave;
                    let state = if autosave { "On" } else { "Off" };
                    self.write(&format!("Autosave is now {}\n", state))?;
                }
                "4" => {
                    let reloaded = self.api.reload();
                    self.report(reloaded)?;
                }
                "5" => {
                    let Some(path) = self.line("New config file path: ")? else {
                        return Ok(Flow::Exit);
                    };
                    let path = path.trim();
                    if !path.is_empty() {
                        self.api.set_config_path(PathBuf::from(path));
                        self.write(&format!("Config file set to {}\n", path))?;
                    }
                }
                "0" => return Ok(Flow::Continue),
                _ => self.write("Unknown option.\n")?,
            }
        }
    }

    /// Points the menu at another data file and loads it if it exists.
    /// Otherwise the current items stay and will be saved to the new file.
    fn switch_data_file(&mut self, path: PathBuf) -> Result<()> {
        debug!(path = %path.display(), "switching data file");
        self.api.settings_mut().data_file = path.clone();
        if path.exists() {
            let reloaded = self.api.reload();
            self.report(reloaded)
        } else {
            self.say(&[CmdMessage::info(format!(
                "{} does not exist yet; it will be created on save",
                path.display()
            ))])
        }
    }

    /// Prints a command outcome. Command errors are shown, not propagated,
    /// so the menu keeps running.
    fn report(&mut self, outcome: Result<stockroom::api::CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => self.write(&render_result(&result)),
            Err(e) => self.say(&[CmdMessage::error(e.to_string())]),
        }
    }

    fn say(&mut self, messages: &[CmdMessage]) -> Result<()> {
        self.write(&render_messages(messages))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).map_err(terminal)?;
        self.out.flush().map_err(terminal)
    }

    /// `None` at end of input.
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf).map_err(terminal)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    /// Prompts until the answer parses; `None` at end of input.
    fn parsed<T: std::str::FromStr>(&mut self, prompt: &str, kind: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.write(&format!("Please enter a valid {}.\n", kind))?,
            }
        }
    }

    fn int(&mut self, prompt: &str) -> Result<Option<i64>> {
        self.parsed(prompt, "integer")
    }

    fn number(&mut self, prompt: &str) -> Result<Option<f64>> {
        self.parsed(prompt, "number")
    }

    fn id(&mut self, prompt: &str) -> Result<Option<u64>> {
        self.parsed(prompt, "id")
    }

    /// Blank keeps the current value (`Some(None)`); `None` at end of input.
    fn optional<T: std::str::FromStr>(
        &mut self,
        prompt: &str,
        kind: &str,
    ) -> Result<Option<Option<T>>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(None));
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(Some(value))),
                Err(_) => self.write(&format!("Please enter a valid {}.\n", kind))?,
            }
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn sort_choice(choice: &str) -> Option<SortField> {
    let index: usize = choice.parse().ok()?;
    SortField::ALL.get(index.checked_sub(1)?).copied()
}
