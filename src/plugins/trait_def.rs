//! Plugin hook definitions

use crate::application::errors::PluginError;
use crate::domain::entities::{CommandArgs, CommandResponse, FileInfo, HttpRequest, HttpResponse, UploadDecision};
use crate::infrastructure::config::Configuration;

/// Callbacks the host runtime invokes on a plugin.
///
/// The host owns the lifecycle; nothing in this crate calls these hooks
/// except tests and the CLI.
pub trait PluginHooks: Send + Sync {
    /// Invoked when the plugin is activated. An error keeps it deactivated.
    fn on_activate(&self) -> Result<(), PluginError>;

    /// Invoked when the plugin is deactivated
    fn on_deactivate(&self) -> Result<(), PluginError>;

    /// Invoked with a freshly loaded configuration
    fn on_configuration_change(&self, configuration: Configuration) -> Result<(), PluginError>;

    /// Runs a slash command registered by this plugin
    fn execute_command(&self, args: &CommandArgs) -> Result<CommandResponse, PluginError>;

    /// Invoked before an uploaded file is committed to storage
    fn file_will_be_uploaded(&self, file: FileInfo) -> UploadDecision;

    /// Handles an HTTP request routed to this plugin
    fn serve_http(&self, req: &HttpRequest) -> HttpResponse;
}
