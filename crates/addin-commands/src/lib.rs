//! Toolbar commands of the surface-points add-in.
//!
//! Each command collects dialog inputs, runs one pipeline from `point-ops`
//! against the injected host, and reports the outcome through a message box.

pub mod config;
pub mod dialog;
pub mod dispatch;
pub mod messages;
pub mod registry;
pub mod session;

pub use config::AddinConfig;
pub use dialog::{validate_non_negative, DialogError, ExportDialog, ImportDialog};
pub use dispatch::dispatch;
pub use messages::{CommandRequest, CommandResponse};
pub use registry::{CommandDefinition, CommandKind, CommandRegistry};
pub use session::{AddinSession, CommandError, CommandRun};
