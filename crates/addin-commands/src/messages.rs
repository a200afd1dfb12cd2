use serde::{Deserialize, Serialize};

use crate::dialog::{ExportDialog, ImportDialog};
use crate::registry::CommandKind;

/// A command execution request, carrying the dialog inputs of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandRequest {
    SurfaceToCsv { dialog: ExportDialog },
    CsvToPoints { dialog: ImportDialog },
}

impl CommandRequest {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandRequest::SurfaceToCsv { .. } => CommandKind::SurfaceToCsv,
            CommandRequest::CsvToPoints { .. } => CommandKind::CsvToPoints,
        }
    }
}

/// Outcome of a command run, after the user has been notified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandResponse {
    /// The pipeline ran to completion; `summary` is the text shown to the user.
    Completed { command: CommandKind, summary: String },
    /// The command did nothing because no design was active.
    Skipped { command: CommandKind, reason: String },
    /// The pipeline aborted; `message` is the text shown to the user.
    Failed { command: CommandKind, message: String },
}

impl CommandResponse {
    pub fn is_completed(&self) -> bool {
        matches!(self, CommandResponse::Completed { .. })
    }
}
