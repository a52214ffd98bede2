//! Config command - read and change persistent settings

use crate::{
    FlashdeckError,
    cli::ConfigCommands,
    config::{CONFIG_KEYS, FlashdeckConfig},
    ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, FlashdeckError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
///
/// Returns `FlashdeckError` if the key is unknown, the value does not parse,
/// or the updated configuration cannot be saved.
pub fn execute(
    mut config: FlashdeckConfig,
    command: &ConfigCommands,
    path: &Path,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = ConfigCommands::split_setting(setting).ok_or_else(|| {
                FlashdeckError::InvalidInput(
                    "Invalid format. Use: flashdeck config set key=value".into(),
                )
            })?;

            config.set(key, value)?;
            config.save_to(path)?;
            if !quiet {
                out.success(&format!("Set {key} = {value}"));
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| {
                FlashdeckError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                ))
            })?;
            out.write(&value);
        }
        ConfigCommands::Show => {
            if !quiet {
                out.info(&format!("Config file: {}", path.display()));
            }
            for key in CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    out.write(&format!("{key} = {value}"));
                }
            }
        }
    }
    Ok(())
}
