//! Chat-server plugin that only lets image files through the upload pipeline.
//!
//! The host runtime drives everything through [`plugins::PluginHooks`]; the
//! decision itself lives in [`application::services::UploadGatekeeper`].

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod plugins;
pub mod cli;

pub use application::errors::{PluginError, UploadError, UNSUPPORTED_FILE_TYPE_MESSAGE};
pub use application::services::UploadGatekeeper;
pub use domain::entities::{FileInfo, UploadDecision};
pub use infrastructure::config::Configuration;
pub use plugins::{PluginHooks, UploadGuardPlugin};
