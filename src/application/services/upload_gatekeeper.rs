//! Upload gatekeeper - decides whether a file may be stored
//!
//! Only metadata is inspected. A file passes when its declared MIME type is
//! allowed OR its lowercased name ends with an allowed extension. Nothing here
//! looks at file bytes, so a renamed file with a spoofed type still passes.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::application::errors::ConfigError;
use crate::domain::entities::{FileInfo, UploadDecision};
use crate::infrastructure::config::UploadConfig;

static DEFAULT_GATEKEEPER: Lazy<UploadGatekeeper> = Lazy::new(|| {
    let config = UploadConfig::default();
    UploadGatekeeper::new(config.allowed_mime_types, config.allowed_extensions)
});

/// Immutable allow-lists and the pure check over them
#[derive(Debug, Clone)]
pub struct UploadGatekeeper {
    allowed_mime_types: HashSet<String>,
    allowed_extensions: HashSet<String>,
}

impl UploadGatekeeper {
    /// Extensions are stored lowercased; MIME types are kept verbatim.
    pub fn new<M, E>(allowed_mime_types: M, allowed_extensions: E) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            allowed_mime_types: allowed_mime_types.into_iter().map(Into::into).collect(),
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| {
                    let ext: String = ext.into();
                    ext.to_lowercase()
                })
                .collect(),
        }
    }

    pub fn from_config(config: &UploadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.allowed_mime_types.iter().cloned(),
            config.allowed_extensions.iter().cloned(),
        ))
    }

    /// Gatekeeper over PNG, JPG, JPEG and SVG
    pub fn shared_default() -> &'static UploadGatekeeper {
        &DEFAULT_GATEKEEPER
    }

    pub fn is_allowed_mime(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(mime_type)
    }

    pub fn has_allowed_extension(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.allowed_extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    pub fn evaluate(&self, file: FileInfo) -> UploadDecision {
        let mime_ok = self.is_allowed_mime(&file.mime_type);
        let ext_ok = self.has_allowed_extension(&file.name);

        if mime_ok || ext_ok {
            return UploadDecision::accept(file);
        }

        tracing::debug!(name = %file.name, mime_type = %file.mime_type, "Rejected upload");
        UploadDecision::reject()
    }
}

impl Default for UploadGatekeeper {
    fn default() -> Self {
        (*DEFAULT_GATEKEEPER).clone()
    }
}
