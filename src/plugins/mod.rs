//! Plugin surface exposed to the host runtime

pub mod trait_def;
pub mod upload_guard;

pub use trait_def::PluginHooks;
pub use upload_guard::{Snapshot, UploadGuardPlugin};
