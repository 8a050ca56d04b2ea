//! The image-only upload plugin

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use crate::application::errors::PluginError;
use crate::application::http::Router;
use crate::application::services::{CommandService, TemplateStore, UploadGatekeeper};
use crate::domain::entities::{CommandArgs, CommandResponse, FileInfo, HttpRequest, HttpResponse, UploadDecision};
use crate::domain::traits::KvStore;
use crate::infrastructure::config::Configuration;
use crate::plugins::trait_def::PluginHooks;

/// Configuration and the gatekeeper built from it, replaced as one unit
#[derive(Debug)]
pub struct Snapshot {
    pub configuration: Configuration,
    pub gatekeeper: UploadGatekeeper,
}

impl Snapshot {
    pub fn build(configuration: Configuration) -> Result<Self, PluginError> {
        configuration.validate()?;
        let gatekeeper = UploadGatekeeper::from_config(&configuration.upload)?;
        Ok(Self {
            configuration,
            gatekeeper,
        })
    }
}

/// Clients created on activation
struct Clients {
    templates: TemplateStore,
    commands: Arc<CommandService>,
}

pub struct UploadGuardPlugin {
    snapshot: RwLock<Arc<Snapshot>>,
    kv: Arc<dyn KvStore>,
    clients: RwLock<Option<Clients>>,
    router: Router,
}

impl UploadGuardPlugin {
    pub fn new(configuration: Configuration, kv: Arc<dyn KvStore>) -> Result<Self, PluginError> {
        let snapshot = Snapshot::build(configuration)?;
        Ok(Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            kv,
            clients: RwLock::new(None),
            router: Router::new(),
        })
    }

    /// Current configuration snapshot. Readers keep the snapshot they got even
    /// if a reload happens meanwhile.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // Both locks only ever see whole-value assignments, so a poisoned lock
    // still holds a consistent value and is recovered rather than reported.
    fn clients(&self) -> RwLockReadGuard<'_, Option<Clients>> {
        self.clients.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn clients_mut(&self) -> RwLockWriteGuard<'_, Option<Clients>> {
        self.clients.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_active(&self) -> bool {
        self.clients().is_some()
    }

    /// KV wrapper, available once activated
    pub fn templates(&self) -> Result<TemplateStore, PluginError> {
        self.clients()
            .as_ref()
            .map(|c| c.templates.clone())
            .ok_or(PluginError::NotActivated)
    }

    fn commands(&self) -> Result<Arc<CommandService>, PluginError> {
        self.clients()
            .as_ref()
            .map(|c| c.commands.clone())
            .ok_or(PluginError::NotActivated)
    }
}

impl PluginHooks for UploadGuardPlugin {
    fn on_activate(&self) -> Result<(), PluginError> {
        let commands = CommandService::default();
        for reg in commands.registrations() {
            info!("Registering command: /{} {}", reg.trigger, reg.hint);
        }

        *self.clients_mut() = Some(Clients {
            templates: TemplateStore::new(self.kv.clone()),
            commands: Arc::new(commands),
        });

        info!("Activated plugin {}", self.snapshot().configuration.plugin.id);
        Ok(())
    }

    fn on_deactivate(&self) -> Result<(), PluginError> {
        self.clients_mut().take();

        info!("Deactivated plugin {}", self.snapshot().configuration.plugin.id);
        Ok(())
    }

    fn on_configuration_change(&self, configuration: Configuration) -> Result<(), PluginError> {
        let next = Arc::new(Snapshot::build(configuration)?);

        let mut current = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *current = next;

        info!(
            mime_types = current.configuration.upload.allowed_mime_types.len(),
            extensions = current.configuration.upload.allowed_extensions.len(),
            "Configuration reloaded"
        );
        Ok(())
    }

    fn execute_command(&self, args: &CommandArgs) -> Result<CommandResponse, PluginError> {
        let commands = self.commands()?;
        debug!("Executing command: {}", args.command);
        Ok(commands.handle(args)?)
    }

    fn file_will_be_uploaded(&self, file: FileInfo) -> UploadDecision {
        self.snapshot().gatekeeper.evaluate(file)
    }

    fn serve_http(&self, req: &HttpRequest) -> HttpResponse {
        self.router.serve(req)
    }
}
