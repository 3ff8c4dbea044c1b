//! Command orchestration helpers from UI actions to backend command queue.

use client_core::UploadForm;
use crossbeam_channel::{Sender, TrySendError};
use shared::error::TransportError;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), TransportError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(TransportError::Unexpected)
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(TransportError::Unexpected)
        }
    }
}

/// Starts an upload of the selected file, settling the attempt at once if the
/// backend cannot take it.
pub fn submit_selected_file(form: &mut UploadForm, cmd_tx: &Sender<BackendCommand>) {
    let Some(submission) = form.begin_submission() else {
        return;
    };
    let attempt = submission.attempt;
    if let Err(err) = dispatch_backend_command(cmd_tx, BackendCommand::StartUpload(submission)) {
        form.finish(attempt, Err(err));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossbeam_channel::bounded;
    use shared::{
        domain::{FileDescriptor, UploadStatus, MAX_FILE_SIZE_BYTES},
        error::{UploadError, ValidationError},
    };

    use super::*;

    fn form_with_selection() -> UploadForm {
        let mut form = UploadForm::new(MAX_FILE_SIZE_BYTES);
        form.pick(Some(FileDescriptor {
            name: "leads.csv".to_string(),
            path: PathBuf::from("/tmp/leads.csv"),
            size_bytes: 2 * 1024 * 1024,
            media_type: Some("text/csv".to_string()),
        }));
        form
    }

    #[test]
    fn queues_selected_file_for_backend() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut form = form_with_selection();

        submit_selected_file(&mut form, &cmd_tx);

        assert!(form.is_in_flight());
        match cmd_rx.try_recv() {
            Ok(BackendCommand::StartUpload(submission)) => {
                assert_eq!(submission.file.name, "leads.csv");
            }
            Err(err) => panic!("expected queued upload, got {err}"),
        }
    }

    #[test]
    fn submit_without_file_never_reaches_backend() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut form = UploadForm::new(MAX_FILE_SIZE_BYTES);

        submit_selected_file(&mut form, &cmd_tx);

        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(
            form.status(),
            &UploadStatus::Error(UploadError::Validation(ValidationError::NoFileSelected))
        );
    }

    #[test]
    fn disconnected_backend_settles_attempt_as_unexpected() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut form = form_with_selection();

        submit_selected_file(&mut form, &cmd_tx);

        assert!(!form.is_in_flight());
        assert_eq!(form.progress(), 0);
        assert_eq!(
            form.status(),
            &UploadStatus::Error(UploadError::Transport(TransportError::Unexpected))
        );
        assert!(form.selected().is_some());
    }
}
