//! Backend worker: owns the tokio runtime and the HTTP transport, runs one
//! upload at a time, and reports progress and outcomes back to the UI queue.

use std::{sync::Arc, thread};

use client_core::{
    HttpUploadTransport, ProgressObserver, Submission, UploadTransport, UploaderSettings,
};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::{domain::TransferProgress, error::TransportError};
use tokio::task::JoinError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: UploaderSettings,
) {
    let transport: Arc<dyn UploadTransport> = Arc::new(HttpUploadTransport::new(&settings));
    let failure_tx = ui_tx.clone();
    let spawned = thread::Builder::new()
        .name("upload-backend".to_string())
        .spawn(move || run_backend(cmd_rx, ui_tx, transport));
    if let Err(err) = spawned {
        tracing::error!("failed to spawn backend worker thread: {err}");
        let _ = failure_tx.try_send(UiEvent::BackendFailed(format!(
            "backend worker startup failure: {err}"
        )));
    }
}

fn run_backend(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: Arc<dyn UploadTransport>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                "backend worker startup failure: failed to build runtime: {err}"
            )));
            return;
        }
    };

    runtime.block_on(async move {
        tracing::info!("backend worker ready");
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::StartUpload(submission) => {
                    let attempt = submission.attempt;
                    let outcome =
                        run_upload(Arc::clone(&transport), submission, ui_tx.clone()).await;
                    if ui_tx
                        .send(UiEvent::UploadFinished { attempt, outcome })
                        .is_err()
                    {
                        tracing::warn!(
                            attempt,
                            "ui event queue closed before upload outcome was delivered"
                        );
                        break;
                    }
                }
            }
        }
        tracing::info!("backend worker stopped");
    });
}

/// Runs the transport on its own task so a panic or cancellation still yields an outcome.
async fn run_upload(
    transport: Arc<dyn UploadTransport>,
    submission: Submission,
    ui_tx: Sender<UiEvent>,
) -> Result<(), TransportError> {
    let observer: Arc<dyn ProgressObserver> = Arc::new(UiProgressForwarder {
        attempt: submission.attempt,
        ui_tx,
    });
    let task = tokio::spawn(async move { transport.upload(&submission.file, observer).await });
    settle_upload_task(task.await)
}

fn settle_upload_task(
    joined: Result<Result<(), TransportError>, JoinError>,
) -> Result<(), TransportError> {
    match joined {
        Ok(outcome) => outcome,
        Err(err) if err.is_cancelled() => {
            tracing::warn!("upload task was cancelled");
            Err(TransportError::Aborted)
        }
        Err(err) => {
            tracing::error!("upload task failed: {err}");
            Err(TransportError::Unexpected)
        }
    }
}

struct UiProgressForwarder {
    attempt: u64,
    ui_tx: Sender<UiEvent>,
}

impl ProgressObserver for UiProgressForwarder {
    fn on_progress(&self, progress: TransferProgress) {
        let event = UiEvent::UploadProgress {
            attempt: self.attempt,
            progress,
        };
        match self.ui_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::debug!(
                    attempt = self.attempt,
                    "ui event queue full; dropping progress tick"
                );
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(
                    attempt = self.attempt,
                    "ui event queue closed; dropping progress tick"
                );
            }
        }
    }
}
