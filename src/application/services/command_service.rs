use crate::domain::entities::{Command, CommandArgs, CommandRegistry, CommandResponse};
use crate::application::errors::CommandError;

pub const HELLO_TRIGGER: &str = "hello";

/// Autocomplete data the host needs to register a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistration {
    pub trigger: String,
    pub description: String,
    pub hint: String,
}

/// Service for managing and executing slash commands
pub struct CommandService {
    registry: CommandRegistry,
}

impl CommandService {
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::new(),
        }
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self) {
        self.register(Command::new(HELLO_TRIGGER)
            .with_description("Say hello to someone")
            .with_hint("[@username]")
            .with_handler(execute_hello));
    }

    pub fn handle(&self, args: &CommandArgs) -> Result<CommandResponse, CommandError> {
        let trigger = args.trigger()
            .ok_or_else(|| CommandError::InvalidArgs("empty command".to_string()))?;

        let Some(cmd) = self.registry.find(trigger) else {
            return Ok(CommandResponse::ephemeral(format!("Unknown command: {}", args.command)));
        };

        match &cmd.handler {
            Some(handler) => handler(args),
            None => Err(CommandError::ExecutionFailed(format!("Command /{} has no handler", cmd.trigger))),
        }
    }

    /// Commands to register with the host, sorted by trigger
    pub fn registrations(&self) -> Vec<CommandRegistration> {
        let mut list: Vec<_> = self.registry.all()
            .map(|cmd| CommandRegistration {
                trigger: cmd.trigger.clone(),
                description: cmd.description.clone().unwrap_or_default(),
                hint: cmd.hint.clone().unwrap_or_default(),
            })
            .collect();
        list.sort_by(|a, b| a.trigger.cmp(&b.trigger));
        list
    }
}

impl Default for CommandService {
    fn default() -> Self {
        let mut service = Self::new();
        service.register_defaults();
        service
    }
}

fn execute_hello(args: &CommandArgs) -> Result<CommandResponse, CommandError> {
    let fields = args.fields();
    let Some(username) = fields.get(1) else {
        return Ok(CommandResponse::ephemeral("Please specify a username"));
    };
    Ok(CommandResponse::in_channel(format!("Hello, {}", username)))
}
