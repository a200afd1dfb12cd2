use point_ops::OpError;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::AddinConfig;
use crate::dialog::DialogError;
use crate::registry::{CommandKind, CommandRegistry};

/// The add-in while it is loaded: its config and registered commands.
#[derive(Debug)]
pub struct AddinSession {
    pub config: AddinConfig,
    pub registry: CommandRegistry,
}

impl AddinSession {
    /// Load the add-in and register its commands.
    pub fn start(config: AddinConfig) -> Result<Self, CommandError> {
        let mut registry = CommandRegistry::new();
        registry.start(&config)?;
        info!(
            addin = %config.addin_name,
            commands = registry.definitions().len(),
            "add-in started"
        );
        Ok(Self { config, registry })
    }

    /// Unload the add-in, removing its commands.
    pub fn stop(&mut self) {
        let removed = self.registry.stop();
        info!(addin = %self.config.addin_name, removed = removed.len(), "add-in stopped");
    }
}

/// State owned by a single command execution. Dropped when the run ends.
#[derive(Debug)]
pub struct CommandRun {
    pub id: Uuid,
    pub kind: CommandKind,
}

impl CommandRun {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }
}

impl Drop for CommandRun {
    fn drop(&mut self) {
        debug!(run = %self.id, command = self.kind.name(), "command run released");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command already registered: {id}")]
    AlreadyRegistered { id: String },

    #[error("command not registered: {}", command.name())]
    NotRegistered { command: CommandKind },

    #[error("invalid dialog input: {0}")]
    Dialog(#[from] DialogError),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error("invalid add-in config: {reason}")]
    Config { reason: String },
}
