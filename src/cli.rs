//! Command-line helpers behind the `image-upload-guard` binary

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;

use crate::application::errors::{ConfigError, PluginError};
use crate::domain::entities::{FileInfo, UploadDecision};
use crate::infrastructure::config::Configuration;
use crate::infrastructure::storage::MemoryKvStore;
use crate::plugins::{PluginHooks, UploadGuardPlugin};

pub const EXIT_ACCEPTED: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Reads the config file, falling back to defaults plus env overrides when it
/// is missing or unreadable.
pub fn load_config(config_path: &Path) -> Configuration {
    if config_path.exists() {
        Configuration::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Configuration::load_env()
        })
    } else {
        Configuration::load_env()
    }
}

/// Runs a candidate through the upload hook of a freshly built plugin.
pub fn check_file(config: Configuration, name: impl Into<String>, mime: impl Into<String>) -> Result<UploadDecision, PluginError> {
    let plugin = UploadGuardPlugin::new(config, Arc::new(MemoryKvStore::new()))?;
    Ok(plugin.file_will_be_uploaded(FileInfo::new(name, mime)))
}

/// Line printed on stdout for a decision
pub fn describe(decision: &UploadDecision) -> String {
    if decision.is_accepted() {
        "accepted".to_string()
    } else {
        format!("rejected: {}", decision.rejection_message)
    }
}

pub fn check_exit_code(result: &Result<UploadDecision, PluginError>) -> i32 {
    match result {
        Ok(decision) if decision.is_accepted() => EXIT_ACCEPTED,
        Ok(_) => EXIT_REJECTED,
        Err(_) => EXIT_CONFIG_ERROR,
    }
}

/// Writes the default configuration. Never overwrites an existing file.
pub fn init_config(config_path: &Path) -> Result<(), ConfigError> {
    let yaml = Configuration::default().to_yaml()?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ConfigError::AlreadyExists(config_path.display().to_string()),
            _ => ConfigError::Io(format!("Failed to create {}: {}", config_path.display(), e)),
        })?;

    file.write_all(yaml.as_bytes())
        .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", config_path.display(), e)))
}
