use thiserror::Error;

use crate::messages::MessageKey;

/// Reasons a picked file or a submit request is refused before any network traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("selected file is not a CSV file")]
    NotCsv,
    #[error("file exceeds the 10MB size limit")]
    TooLarge,
    #[error("no file selected for upload")]
    NoFileSelected,
}

/// Terminal failures of a single upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("server error: {0}")]
    ServerStatus(u16),
    #[error("network connection error")]
    NetworkFailure,
    #[error("upload was aborted")]
    Aborted,
    #[error("an unexpected error occurred while starting the scenario")]
    Unexpected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl UploadError {
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::Validation(ValidationError::NotCsv) => MessageKey::NotCsv,
            Self::Validation(ValidationError::TooLarge) => MessageKey::TooLarge,
            Self::Validation(ValidationError::NoFileSelected) => MessageKey::NoFileSelected,
            Self::Transport(TransportError::ServerStatus(_)) => MessageKey::ServerError,
            Self::Transport(TransportError::NetworkFailure) => MessageKey::NetworkFailure,
            Self::Transport(TransportError::Aborted) => MessageKey::Aborted,
            Self::Transport(TransportError::Unexpected) => MessageKey::Unexpected,
        }
    }

    /// HTTP status carried by a non-2xx response, if this error came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::ServerStatus(code)) => Some(*code),
            _ => None,
        }
    }
}
