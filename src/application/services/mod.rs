//! Application services - Business logic orchestration

pub mod command_service;
pub mod kv_service;
pub mod upload_gatekeeper;

pub use command_service::{CommandRegistration, CommandService};
pub use kv_service::TemplateStore;
pub use upload_gatekeeper::UploadGatekeeper;
