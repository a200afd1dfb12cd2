use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AddinConfig;
use crate::session::CommandError;

/// The commands this add-in provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandKind {
    SurfaceToCsv,
    CsvToPoints,
}

impl CommandKind {
    pub const ALL: [CommandKind; 2] = [CommandKind::SurfaceToCsv, CommandKind::CsvToPoints];

    /// Suffix used in the command id.
    pub fn slug(self) -> &'static str {
        match self {
            CommandKind::SurfaceToCsv => "surfaceToCsv",
            CommandKind::CsvToPoints => "csvToPoints",
        }
    }

    /// Button label.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::SurfaceToCsv => "Surface to Points",
            CommandKind::CsvToPoints => "CSV to Points",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandKind::SurfaceToCsv => {
                "Exports a surface as coordinates in a CSV file, based on a mesh."
            }
            CommandKind::CsvToPoints => "Imports points from a CSV file.",
        }
    }
}

/// A toolbar button definition as registered with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub kind: CommandKind,
    /// `<company>_<addin>_<slug>`.
    pub id: String,
    pub name: String,
    pub description: String,
    pub workspace_id: String,
    pub panel_id: String,
    pub command_beside_id: String,
    pub promoted: bool,
}

impl CommandDefinition {
    pub fn new(kind: CommandKind, config: &AddinConfig) -> Self {
        Self {
            kind,
            id: format!("{}_{}_{}", config.company_name, config.addin_name, kind.slug()),
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            workspace_id: config.workspace_id.clone(),
            panel_id: config.panel_id.clone(),
            command_beside_id: config.command_beside_id.clone(),
            promoted: config.promoted,
        }
    }
}

/// Commands currently registered with the host UI.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every command. Fails if any command is already registered.
    pub fn start(&mut self, config: &AddinConfig) -> Result<(), CommandError> {
        if let Some(existing) = self.definitions.first() {
            return Err(CommandError::AlreadyRegistered {
                id: existing.id.clone(),
            });
        }
        for kind in CommandKind::ALL {
            let definition = CommandDefinition::new(kind, config);
            info!(id = %definition.id, panel = %definition.panel_id, "command registered");
            self.definitions.push(definition);
        }
        Ok(())
    }

    /// Remove every command, returning the removed definitions.
    pub fn stop(&mut self) -> Vec<CommandDefinition> {
        let removed = std::mem::take(&mut self.definitions);
        for definition in &removed {
            info!(id = %definition.id, "command removed");
        }
        removed
    }

    pub fn get(&self, kind: CommandKind) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }

    /// Definition of a registered command, or `NotRegistered`.
    pub fn require(&self, kind: CommandKind) -> Result<&CommandDefinition, CommandError> {
        self.get(kind).ok_or(CommandError::NotRegistered { command: kind })
    }
}
