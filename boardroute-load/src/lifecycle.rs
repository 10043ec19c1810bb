//! Maps the workspace's fate to the process exit status.

use std::process::ExitCode;

use boardroute_core::BootError;

use crate::workspace::Workspace;

/// Final status of one process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Workspace closed normally, or help was printed.
    Success,
    /// No workspace was produced, or it vanished without closing.
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Own the workspace until it closes and decide the exit status.
///
/// A failed load yields [`ExitStatus::Failure`] at once; nothing is waited on.
/// Otherwise the calling thread blocks on the workspace's closed signal.
pub fn supervise<W: Workspace>(outcome: Result<W, BootError>) -> ExitStatus {
    let mut workspace = match outcome {
        Ok(workspace) => workspace,
        Err(err) => {
            tracing::debug!(error = %err, "no workspace to supervise");
            return ExitStatus::Failure;
        }
    };

    let status = match workspace.on_closed().wait() {
        Ok(()) => {
            tracing::info!("workspace closed");
            ExitStatus::Success
        }
        Err(_) => {
            tracing::warn!("workspace went away without signalling closure");
            ExitStatus::Failure
        }
    };
    drop(workspace);
    status
}
