//! State transitions driven by picks and backend events, applied on the UI thread.

use std::path::Path;

use client_core::{describe_path, PickOutcome, UploadForm};

use crate::controller::events::UiEvent;

pub struct ControllerState {
    pub form: UploadForm,
    pub backend_failure: Option<String>,
}

impl ControllerState {
    pub fn new(max_file_size: u64) -> Self {
        Self {
            form: UploadForm::new(max_file_size),
            backend_failure: None,
        }
    }

    /// Feeds a dialog result or a dropped path into the form. A path that
    /// cannot be described is treated as no pick at all.
    pub fn pick_path(&mut self, path: Option<&Path>) -> PickOutcome {
        let picked = match path {
            Some(path) => match describe_path(path) {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!("ignoring picked path: {err:#}");
                    return PickOutcome::Unchanged;
                }
            },
            None => None,
        };
        self.form.pick(picked)
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::BackendFailed(reason) => {
                tracing::error!("{reason}");
                self.backend_failure = Some(reason);
            }
            UiEvent::UploadProgress { attempt, progress } => {
                self.form.record_progress(attempt, progress);
            }
            UiEvent::UploadFinished { attempt, outcome } => {
                self.form.finish(attempt, outcome);
            }
        }
    }
}
