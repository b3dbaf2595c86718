//! # API Facade
//!
//! [`InventoryApi`] is the single entry point for UI clients. It owns the
//! [`Inventory`] and the active [`Settings`], dispatches to the command layer,
//! and applies the one policy that spans commands: saving the data file after
//! a change when autosave is on.
//!
//! Like the commands, it returns [`CmdResult`]s and never writes to the
//! terminal.

use crate::commands;
use crate::config::Settings;
use crate::error::Result;
use crate::model::ItemFields;
use crate::store::Inventory;
use crate::view::SortField;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct InventoryApi {
    store: Inventory,
    settings: Settings,
    config_path: PathBuf,
    always_save: bool,
    /// File and count of lines left out by the last load. Saving over that
    /// file would drop them.
    skipped_on_load: Option<(PathBuf, usize)>,
}

impl InventoryApi {
    pub fn new(store: Inventory, settings: Settings, config_path: PathBuf) -> Self {
        Self {
            store,
            settings,
            config_path,
            always_save: false,
            skipped_on_load: None,
        }
    }

    /// Save after every change regardless of the `autosave` setting.
    /// One-shot clients want this; the interactive menu does not.
    pub fn with_always_save(mut self, always_save: bool) -> Self {
        self.always_save = always_save;
        self
    }

    pub fn store(&self) -> &Inventory {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Where settings are written from now on. Nothing is read from it.
    pub fn set_config_path(&mut self, path: PathBuf) {
        self.config_path = path;
    }

    pub fn data_file(&self) -> &Path {
        &self.settings.data_file
    }

    fn saves_after_change(&self) -> bool {
        self.always_save || self.settings.autosave
    }

    /// Loads the data file. A file that does not exist yet is an empty
    /// inventory, not an error.
    pub fn open_data_file(&mut self) -> Result<CmdResult> {
        let path = self.settings.data_file.clone();
        if !path.exists() {
            debug!(path = %path.display(), "data file does not exist, starting empty");
            self.skipped_on_load = None;
            return Ok(CmdResult::default());
        }
        self.load_from(&path)
    }

    pub fn list(
        &self,
        sort: Option<SortField>,
        page_size: Option<usize>,
        page: usize,
    ) -> Result<CmdResult> {
        commands::list::run(
            &self.store,
            sort.unwrap_or(self.settings.sort_field),
            page_size.unwrap_or(self.settings.page_size),
            page,
        )
    }

    pub fn get(&self, id: u64) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn add(&mut self, fields: ItemFields) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, fields)?;
        self.after_change(result)
    }

    pub fn update(&mut self, id: u64, update: ItemUpdate) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, update)?;
        self.after_change(result)
    }

    pub fn remove(&mut self, id: u64) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.store, id)?;
        self.after_change(result)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn low_stock(&self, threshold: i64) -> Result<CmdResult> {
        commands::low_stock::run(&self.store, threshold)
    }

    pub fn import(&mut self, path: &Path) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.store, path)?;
        self.after_change(result)
    }

    pub fn export(&self, path: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    /// Replaces the store with the data file, discarding unsaved changes.
    pub fn reload(&mut self) -> Result<CmdResult> {
        let path = self.settings.data_file.clone();
        self.load_from(&path)
    }

    fn load_from(&mut self, path: &Path) -> Result<CmdResult> {
        let result = commands::load::run(&mut self.store, path)?;
        self.skipped_on_load = result
            .report
            .as_ref()
            .filter(|r| r.skipped > 0)
            .map(|r| (path.to_path_buf(), r.skipped));
        Ok(result)
    }

    /// Writes the data file on request, even over lines skipped on load.
    pub fn save(&mut self) -> Result<CmdResult> {
        let result = commands::save::run(&self.store, &self.settings.data_file)?;
        self.skipped_on_load = None;
        Ok(result)
    }

    /// Shows or changes settings; changes are written to the config file.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let persist = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&mut self.settings, action)?;
        if persist {
            self.save_settings()?;
        }
        Ok(result)
    }

    pub fn save_settings(&self) -> Result<()> {
        debug!(path = %self.config_path.display(), "writing settings");
        self.settings.save(&self.config_path)
    }

    fn after_change(&self, mut result: CmdResult) -> Result<CmdResult> {
        if !result.changed || !self.saves_after_change() {
            return Ok(result);
        }
        let data_file = &self.settings.data_file;
        if let Some((path, skipped)) = &self.skipped_on_load {
            if path == data_file {
                warn!(skipped, path = %path.display(), "not saving over skipped lines");
                result.add_message(CmdMessage::warning(format!(
                    "Not saved: {} line(s) skipped while loading {} would be lost",
                    skipped,
                    path.display()
                )));
                return Ok(result);
            }
        }

        debug!(path = %data_file.display(), "saving after change");
        self.store.save(data_file)?;
        if !self.always_save {
            result.add_message(CmdMessage::info(format!(
                "Autosaved to {}",
                data_file.display()
            )));
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ItemUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodePolicy;
    use std::fs;
    use tempfile::TempDir;

    fn api_in(dir: &TempDir) -> InventoryApi {
        let settings = Settings {
            data_file: dir.path().join("inventory.csv"),
            ..Settings::default()
        };
        InventoryApi::new(Inventory::new(), settings, dir.path().join("config.json"))
    }

    fn bolt() -> ItemFields {
        ItemFields {
            name: "Bolt".into(),
            quantity: 5,
            price: 0.1,
            ..ItemFields::default()
        }
    }

    #[test]
    fn missing_data_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        let result = api.open_data_file().unwrap();
        assert!(result.messages.is_empty());
        assert!(api.store().is_empty());
    }

    #[test]
    fn does_not_save_without_autosave() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        api.add(bolt()).unwrap();
        assert!(!api.data_file().exists());
    }

    #[test]
    fn autosave_writes_after_change_and_says_so() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        api.settings_mut().autosave = true;

        let result = api.add(bolt()).unwrap();
        assert_eq!(
            fs::read_to_string(api.data_file()).unwrap(),
            "1,Bolt,,,5,0.1\n"
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.starts_with("Autosaved to")));
    }

    #[test]
    fn always_save_writes_quietly() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir).with_always_save(true);
        let result = api.add(bolt()).unwrap();
        assert!(api.data_file().exists());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn never_saves_over_lines_skipped_on_load() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            data_file: dir.path().join("inventory.csv"),
            ..Settings::default()
        };
        let store = Inventory::new().with_policy(DecodePolicy::Strict);
        let mut api = InventoryApi::new(store, settings, dir.path().join("config.json"))
            .with_always_save(true);
        let original = "1,Bolt,,,lots,0.1\n2,Nut,,,2,0.05\n";
        fs::write(api.data_file(), original).unwrap();
        api.open_data_file().unwrap();

        let result = api.add(bolt()).unwrap();
        assert_eq!(fs::read_to_string(api.data_file()).unwrap(), original);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.starts_with("Not saved")));

        api.save().unwrap();
        api.add(bolt()).unwrap();
        assert_eq!(
            fs::read_to_string(api.data_file()).unwrap(),
            "2,Nut,,,2,0.05\n3,Bolt,,,5,0.1\n4,Bolt,,,5,0.1\n"
        );
    }

    #[test]
    fn failed_remove_does_not_save() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir).with_always_save(true);
        api.remove(3).unwrap();
        assert!(!api.data_file().exists());
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        api.add(bolt()).unwrap();
        api.save().unwrap();
        api.add(bolt()).unwrap();
        assert_eq!(api.store().len(), 2);

        api.reload().unwrap();
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn list_uses_settings_defaults() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        api.settings_mut().page_size = 1;
        api.add(bolt()).unwrap();
        api.add(bolt()).unwrap();

        let page = api.list(None, None, 2).unwrap().page.unwrap();
        assert_eq!(page.pages, 2);
        assert_eq!(page.items[0].id, 2);
    }

    #[test]
    fn config_set_persists_settings() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        api.config(ConfigAction::Set("sort".into(), "price".into()))
            .unwrap();

        let saved = Settings::load(api.config_path()).unwrap();
        assert_eq!(saved.sort_field, SortField::Price);
    }

    #[test]
    fn config_show_does_not_write() {
        let dir = TempDir::new().unwrap();
        let mut api = api_in(&dir);
        api.config(ConfigAction::ShowAll).unwrap();
        assert!(!api.config_path().exists());
    }
}
