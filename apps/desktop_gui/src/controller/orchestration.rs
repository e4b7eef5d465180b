//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

const QUEUE_FULL_STATUS: &str = "Backend command queue is full; flags will load shortly";

/// Returns false when the command could not be queued; `status` then says why.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            if *status == QUEUE_FULL_STATUS {
                status.clear();
            }
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = QUEUE_FULL_STATUS.to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker stopped; restart the app to reload data".to_string();
            false
        }
    }
}
