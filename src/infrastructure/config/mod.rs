//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

pub const DEFAULT_PLUGIN_ID: &str = "com.example.image-upload-guard";

pub const DEFAULT_ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/svg+xml"];
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".svg"];

const ENV_ALLOWED_MIME_TYPES: &str = "UPLOAD_GUARD_ALLOWED_MIME_TYPES";
const ENV_ALLOWED_EXTENSIONS: &str = "UPLOAD_GUARD_ALLOWED_EXTENSIONS";

/// Plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default)]
    pub plugin: PluginSection,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginSection {
    pub id: String,
}

impl Default for PluginSection {
    fn default() -> Self {
        Self {
            id: DEFAULT_PLUGIN_ID.to_string(),
        }
    }
}

/// Allowed upload types. Both lists are required when read from a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UploadConfig {
    pub allowed_mime_types: Vec<String>,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES.iter().map(|s| s.to_string()).collect(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(mime) = self.allowed_mime_types.iter().find(|m| m.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(format!("blank MIME type entry {:?}", mime)));
        }
        for ext in &self.allowed_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::InvalidValue(format!(
                    "extension {:?} must start with '.' and name a suffix",
                    ext
                )));
            }
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            plugin: PluginSection::default(),
            upload: UploadConfig::default(),
        }
    }
}

impl Configuration {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Configuration = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plugin.id.trim().is_empty() {
            return Err(ConfigError::MissingField("plugin.id".to_string()));
        }
        self.upload.validate()
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Configuration::default();

        if let Ok(mimes) = std::env::var(ENV_ALLOWED_MIME_TYPES) {
            config.upload.allowed_mime_types = split_list(&mimes);
        }

        if let Ok(exts) = std::env::var(ENV_ALLOWED_EXTENSIONS) {
            config.upload.allowed_extensions = split_list(&exts);
        }

        config
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
