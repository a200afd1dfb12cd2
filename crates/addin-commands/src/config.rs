use point_ops::{ExportConfig, ImportConfig};
use serde::{Deserialize, Serialize};

use crate::session::CommandError;

/// Add-in identity, toolbar placement and pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddinConfig {
    /// Prefix for command ids, shared by every command of the add-in.
    pub company_name: String,
    pub addin_name: String,
    /// Workspace the toolbar buttons are added to.
    pub workspace_id: String,
    /// Toolbar panel inside the workspace.
    pub panel_id: String,
    /// Existing command the buttons are inserted after.
    pub command_beside_id: String,
    /// Whether the buttons are promoted to the main toolbar.
    pub promoted: bool,
    pub export: ExportConfig,
    pub import: ImportConfig,
}

impl Default for AddinConfig {
    fn default() -> Self {
        Self {
            company_name: "ACME".to_string(),
            addin_name: "SurfacePoints".to_string(),
            workspace_id: "FusionSolidEnvironment".to_string(),
            panel_id: "SolidScriptsAddinsPanel".to_string(),
            command_beside_id: "ScriptsManagerCommand".to_string(),
            promoted: true,
            export: ExportConfig::default(),
            import: ImportConfig::default(),
        }
    }
}

impl AddinConfig {
    /// Parse a JSON config. Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self, CommandError> {
        serde_json::from_str(json).map_err(|e| CommandError::Config {
            reason: e.to_string(),
        })
    }
}
