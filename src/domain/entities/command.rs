use std::collections::HashMap;

use crate::application::errors::CommandError;

/// Arguments the host passes with a slash command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    /// Full command text as typed, e.g. `/hello alice`
    pub command: String,
    pub user_id: String,
    pub channel_id: String,
}

impl CommandArgs {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Whitespace-separated fields of the command text
    pub fn fields(&self) -> Vec<&str> {
        self.command.split_whitespace().collect()
    }

    /// First field without its leading slash
    pub fn trigger(&self) -> Option<&str> {
        self.command
            .split_whitespace()
            .next()
            .map(|first| first.trim_start_matches('/'))
    }
}

/// Visibility of a command response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    /// Only visible to the invoking user
    Ephemeral,
    InChannel,
}

/// Reply returned to the host after running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl CommandResponse {
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }

    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }
}

/// Command handler function type
pub type CommandHandler = Box<dyn Fn(&CommandArgs) -> Result<CommandResponse, CommandError> + Send + Sync>;

/// A slash command registered with the host
pub struct Command {
    pub trigger: String,
    pub description: Option<String>,
    pub hint: Option<String>,
    pub handler: Option<CommandHandler>,
}

impl Command {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            description: None,
            hint: None,
            handler: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CommandArgs) -> Result<CommandResponse, CommandError> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("trigger", &self.trigger)
            .field("description", &self.description)
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}

/// Command registry for managing available commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.trigger.clone(), command);
    }

    pub fn find(&self, trigger: &str) -> Option<&Command> {
        self.commands.get(trigger)
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_strips_leading_slash() {
        let args = CommandArgs::new("  /hello   bob ");
        assert_eq!(args.trigger(), Some("hello"));
        assert_eq!(args.fields(), vec!["/hello", "bob"]);
    }

    #[test]
    fn empty_command_has_no_trigger() {
        assert_eq!(CommandArgs::new("   ").trigger(), None);
    }

    #[test]
    fn registering_same_trigger_replaces() {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("hello").with_hint("old"));
        registry.register(Command::new("hello").with_hint("new"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("hello").and_then(|c| c.hint.as_deref()), Some("new"));
    }

    #[test]
    fn registry_finds_by_trigger() {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new("hello").with_hint("[@username]"));
        assert_eq!(registry.len(), 1);
        assert!(registry.find("hello").is_some());
        assert!(registry.find("bye").is_none());
        assert!(registry.find("/hello").is_none());
    }
}
