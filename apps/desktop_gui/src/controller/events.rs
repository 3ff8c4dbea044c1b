//! Events delivered from the backend worker to the UI thread.

use shared::{domain::TransferProgress, error::TransportError};

pub enum UiEvent {
    BackendFailed(String),
    UploadProgress {
        attempt: u64,
        progress: TransferProgress,
    },
    UploadFinished {
        attempt: u64,
        outcome: Result<(), TransportError>,
    },
}
