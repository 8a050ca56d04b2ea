//! Application layer errors

use thiserror::Error;

/// Fixed, user-facing text shown when an upload is refused.
pub const UNSUPPORTED_FILE_TYPE_MESSAGE: &str = "只允許上傳 PNG, JPG, JPEG, SVG 格式的圖片檔案。";

/// Errors surfaced to the host through the plugin hooks
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Plugin is not activated")]
    NotActivated,
}

impl PluginError {
    /// HTTP status the host should attach when reporting this error.
    pub fn status_code(&self) -> u16 {
        match self {
            PluginError::Config(_) => 400,
            PluginError::NotActivated => 503,
            _ => 500,
        }
    }
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config file already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Upload rejection. There is exactly one kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("{}", UNSUPPORTED_FILE_TYPE_MESSAGE)]
    UnsupportedFileType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_file_type_displays_fixed_message() {
        assert_eq!(UploadError::UnsupportedFileType.to_string(), UNSUPPORTED_FILE_TYPE_MESSAGE);
    }

    #[test]
    fn command_errors_map_to_internal_status() {
        let err = PluginError::from(CommandError::InvalidArgs("empty".to_string()));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Command error: Invalid arguments: empty");
    }

    #[test]
    fn config_errors_map_to_bad_request() {
        let err = PluginError::from(ConfigError::InvalidValue("x".to_string()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(PluginError::NotActivated.status_code(), 503);
    }
}
