//! Upload form state: the selected file, the status banner, and the lifecycle
//! of the single in-flight submission.

use shared::{
    domain::{FileDescriptor, TransferProgress, UploadStatus},
    error::{TransportError, ValidationError},
    messages::MessageKey,
};
use tracing::{debug, info, warn};

use crate::{picker::PickerInput, validation::validate_selection};

/// Result of feeding a pick into the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Picking is disabled or the picker still holds the same file.
    Unchanged,
    Dismissed,
    Accepted,
    Rejected(ValidationError),
}

/// A submission the transport should carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub file: FileDescriptor,
}

#[derive(Debug)]
pub struct UploadForm {
    max_file_size: u64,
    picker: PickerInput,
    selected: Option<FileDescriptor>,
    status: UploadStatus,
    progress: u8,
    in_flight: Option<u64>,
    attempts: u64,
}

impl UploadForm {
    pub fn new(max_file_size: u64) -> Self {
        Self {
            max_file_size,
            picker: PickerInput::default(),
            selected: None,
            status: UploadStatus::None,
            progress: 0,
            in_flight: None,
            attempts: 0,
        }
    }

    pub fn selected(&self) -> Option<&FileDescriptor> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn picker(&self) -> &PickerInput {
        &self.picker
    }

    pub fn can_pick(&self) -> bool {
        !self.is_in_flight()
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_in_flight()
    }

    /// Applies a pick from the file dialog or a drop; `None` means the dialog was dismissed.
    pub fn pick(&mut self, picked: Option<FileDescriptor>) -> PickOutcome {
        if !self.can_pick() {
            debug!("ignoring file pick while an upload is in flight");
            return PickOutcome::Unchanged;
        }
        if !self.picker.change(picked.as_ref()) {
            return PickOutcome::Unchanged;
        }

        self.status = UploadStatus::None;
        let Some(file) = picked else {
            return PickOutcome::Dismissed;
        };

        match validate_selection(&file, self.max_file_size) {
            Ok(()) => {
                debug!(file = %file.name, size_bytes = file.size_bytes, "file selected");
                self.selected = Some(file);
                PickOutcome::Accepted
            }
            Err(err) => {
                info!(file = %file.name, size_bytes = file.size_bytes, error = %err, "file rejected");
                self.selected = None;
                self.status = UploadStatus::Error(err.into());
                PickOutcome::Rejected(err)
            }
        }
    }

    /// Starts a submission of the selected file.
    ///
    /// Returns `None` without touching the network when an upload is already in
    /// flight, or when nothing is selected (the status then reports it).
    pub fn begin_submission(&mut self) -> Option<Submission> {
        if self.is_in_flight() {
            debug!("submit ignored while an upload is in flight");
            return None;
        }
        let Some(file) = self.selected.clone() else {
            self.status = UploadStatus::Error(ValidationError::NoFileSelected.into());
            return None;
        };

        self.attempts += 1;
        let attempt = self.attempts;
        self.in_flight = Some(attempt);
        self.progress = 0;
        self.status = UploadStatus::None;
        info!(attempt, file = %file.name, size_bytes = file.size_bytes, "upload started");
        Some(Submission { attempt, file })
    }

    /// Records a progress report; reports without a computable total are dropped.
    /// The shown percent only moves forward within an attempt.
    pub fn record_progress(&mut self, attempt: u64, progress: TransferProgress) -> bool {
        if self.in_flight != Some(attempt) {
            return false;
        }
        match progress.percent() {
            Some(percent) => {
                self.progress = self.progress.max(percent);
                true
            }
            None => false,
        }
    }

    /// Settles the in-flight attempt. Events for any other attempt are ignored.
    pub fn finish(&mut self, attempt: u64, outcome: Result<(), TransportError>) -> bool {
        if self.in_flight != Some(attempt) {
            warn!(attempt, "ignoring outcome for an attempt that is not in flight");
            return false;
        }

        match outcome {
            Ok(()) => {
                info!(attempt, "upload accepted by webhook");
                self.status = UploadStatus::Success(MessageKey::ScenarioStarted);
                self.selected = None;
                self.picker.reset();
            }
            Err(err) => {
                warn!(attempt, error = %err, "upload failed");
                self.status = UploadStatus::Error(err.into());
            }
        }

        self.in_flight = None;
        self.progress = 0;
        true
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
