use std::path::PathBuf;

use crate::{error::UploadError, messages::MessageKey};

/// Largest file the form accepts, in bytes (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Media type a picker reports for comma-separated-value files.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Case-sensitive file name suffix accepted when the media type is missing or different.
pub const CSV_EXTENSION: &str = ".csv";

/// A file the user picked, as described by the picker surface.
///
/// The bytes are never held here; they are read from `path` when an upload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub media_type: Option<String>,
}

impl FileDescriptor {
    pub fn has_csv_media_type(&self) -> bool {
        self.media_type.as_deref() == Some(CSV_MEDIA_TYPE)
    }

    pub fn has_csv_extension(&self) -> bool {
        self.name.ends_with(CSV_EXTENSION)
    }
}

/// Outcome banner of the most recent selection or upload attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    None,
    Success(MessageKey),
    Error(UploadError),
}

impl UploadStatus {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn error(&self) -> Option<&UploadError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Byte counters reported by a transport while a request body is being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub bytes_sent: u64,
    /// `None` when the total length is not computable.
    pub bytes_total: Option<u64>,
}

impl TransferProgress {
    pub fn new(bytes_sent: u64, bytes_total: Option<u64>) -> Self {
        Self {
            bytes_sent,
            bytes_total,
        }
    }

    /// Whole percentage of the body sent, or `None` when the total is unknown.
    pub fn percent(&self) -> Option<u8> {
        let total = self.bytes_total.filter(|total| *total > 0)?;
        let ratio = self.bytes_sent.min(total) as f64 / total as f64;
        Some((ratio * 100.0).round() as u8)
    }
}
