use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes `settings`. Persisting them is up to the caller.
pub fn run(settings: &mut Settings, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in Settings::keys() {
                result
                    .config_values
                    .push((key.to_string(), settings.get(key)?));
            }
        }
        ConfigAction::ShowKey(key) => {
            let value = settings.get(&key)?;
            result.config_values.push((key, value));
        }
        ConfigAction::Set(key, value) => {
            let normalized = settings.set(&key, &value)?;
            result.add_message(CmdMessage::success(format!("{} = {}", key, normalized)));
            result.config_values.push((key, normalized));
        }
    }

    Ok(result)
}
