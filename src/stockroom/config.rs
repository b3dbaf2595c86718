use crate::error::{InventoryError, Result};
use crate::view::SortField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.csv";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Presentation settings, stored as JSON (by default in `config.json`).
///
/// Keys are camelCase (`dataFile`, `pageSize`, `autosave`, `sortField`);
/// snake_case spellings are accepted when reading.
///
/// The store never reads these; the CLI passes `data_file` to it as a path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// CSV file loaded at startup and written on save
    #[serde(default = "default_data_file", alias = "data_file")]
    pub data_file: PathBuf,

    /// Rows per page when listing
    #[serde(default = "default_page_size", alias = "page_size")]
    pub page_size: usize,

    /// Save after every mutation in the interactive menu
    #[serde(default)]
    pub autosave: bool,

    /// Column the list view sorts by
    #[serde(default, alias = "sort_field")]
    pub sort_field: SortField,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
            autosave: false,
            sort_field: SortField::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults if the file is missing
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| InventoryError::io(path, e))?;
        let mut settings: Settings = serde_json::from_str(&content)?;
        settings.set_page_size(settings.page_size);
        Ok(settings)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| InventoryError::io(parent, e))?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| InventoryError::io(path, e))
    }

    /// Page size is never below 1
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
    }

    /// Sets a key by its CLI name. Returns the normalized value as text.
    pub fn set(&mut self, key: &str, value: &str) -> Result<String> {
        match key {
            "data-file" => self.data_file = PathBuf::from(value),
            "page-size" => {
                let size = value
                    .parse()
                    .map_err(|_| InventoryError::Api(format!("Invalid page size: {}", value)))?;
                self.set_page_size(size);
            }
            "autosave" => {
                self.autosave = parse_switch(value)
                    .ok_or_else(|| InventoryError::Api(format!("Invalid autosave: {}", value)))?;
            }
            "sort" => self.sort_field = value.parse()?,
            other => return Err(InventoryError::Api(format!("Unknown config key: {}", other))),
        }
        self.get(key)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "data-file" => self.data_file.display().to_string(),
            "page-size" => self.page_size.to_string(),
            "autosave" => if self.autosave { "on" } else { "off" }.to_string(),
            "sort" => self.sort_field.to_string(),
            other => return Err(InventoryError::Api(format!("Unknown config key: {}", other))),
        };
        Ok(value)
    }

    pub fn keys() -> &'static [&'static str] {
        &["data-file", "page-size", "autosave", "sort"]
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
