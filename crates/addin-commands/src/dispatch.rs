use std::error::Error;

use host_bridge::HostBundle;
use point_ops::{export_surface_points, import_csv_points};
use tracing::{error, info, info_span};

use crate::messages::{CommandRequest, CommandResponse};
use crate::session::{AddinSession, CommandError, CommandRun};

pub const NO_DESIGN_TEXT: &str = "No active design";
pub const NO_DESIGN_TITLE: &str = "No design";
pub const FAILED_TITLE: &str = "Failed";
pub const COMPLETED_TITLE: &str = "Completed";

/// Run one command against the host and report the outcome to the user.
///
/// This is the single place where pipeline errors are caught. Every outcome,
/// success or failure, is shown through a message box and returned as a
/// [`CommandResponse`].
pub fn dispatch(
    session: &AddinSession,
    request: CommandRequest,
    host: &mut dyn HostBundle,
) -> CommandResponse {
    let run = CommandRun::new(request.kind());
    let span = info_span!("command", run = %run.id, command = run.kind.name());
    let _enter = span.enter();

    if !host.has_active_design() {
        info!("no active design, command skipped");
        host.message_box(NO_DESIGN_TEXT, NO_DESIGN_TITLE);
        return CommandResponse::Skipped {
            command: run.kind,
            reason: NO_DESIGN_TEXT.to_string(),
        };
    }

    match handle_request(session, request, host) {
        Ok(summary) => {
            info!("command completed");
            host.message_box(&summary, COMPLETED_TITLE);
            CommandResponse::Completed {
                command: run.kind,
                summary,
            }
        }
        Err(e) => {
            error!(error = %e, "command failed");
            let message = failure_message(&e);
            host.message_box(&message, FAILED_TITLE);
            CommandResponse::Failed {
                command: run.kind,
                message,
            }
        }
    }
}

fn handle_request(
    session: &AddinSession,
    request: CommandRequest,
    host: &mut dyn HostBundle,
) -> Result<String, CommandError> {
    session.registry.require(request.kind())?;

    match request {
        CommandRequest::SurfaceToCsv { dialog } => {
            let request = dialog.into_request()?;
            let report = export_surface_points(host, &request, &session.config.export)?;
            Ok(report.summary())
        }
        CommandRequest::CsvToPoints { dialog } => {
            let request = dialog.into_request(&*host)?;
            let report = import_csv_points(host, &request, &session.config.import)?;
            Ok(report.summary())
        }
    }
}

/// `"Failed:\n<error>"` followed by one `caused by:` line per source whose
/// text is not already part of the message.
pub fn failure_message(err: &dyn Error) -> String {
    let mut message = format!("Failed:\n{}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str("\ncaused by: ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
