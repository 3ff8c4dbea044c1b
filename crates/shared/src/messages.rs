//! Message catalog for every string the uploader shows.
//!
//! Status banners carry a [`MessageKey`] rather than prose; the active [`Locale`]
//! turns keys into text at render time.

use std::{fmt, str::FromStr};

use crate::{domain::UploadStatus, error::UploadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    StepChoose,
    StepSubmit,
    PickPrompt,
    DropHint,
    Uploading,
    Starting,
    StartScenario,
    CreatedBy,
    ScenarioStarted,
    NotCsv,
    TooLarge,
    NoFileSelected,
    /// Contains a `{status}` placeholder.
    ServerError,
    NetworkFailure,
    Aborted,
    Unexpected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Polish,
}

impl Locale {
    pub fn text(self, key: MessageKey) -> &'static str {
        match self {
            Self::English => english(key),
            Self::Polish => polish(key),
        }
    }

    pub fn error_text(self, err: &UploadError) -> String {
        let template = self.text(err.message_key());
        match err.status_code() {
            Some(status) => template.replace("{status}", &status.to_string()),
            None => template.to_string(),
        }
    }

    /// Banner text for a status, or `None` when no banner should be shown.
    pub fn status_text(self, status: &UploadStatus) -> Option<String> {
        match status {
            UploadStatus::None => None,
            UploadStatus::Success(key) => Some(self.text(*key).to_string()),
            UploadStatus::Error(err) => Some(self.error_text(err)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::English => "en",
            Self::Polish => "pl",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'en' or 'pl')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "pl" | "polish" | "polski" => Ok(Self::Polish),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Upload a CSV file with leads and start the scenario",
        MessageKey::StepChoose => "1. Choose a CSV file to upload (10MB maximum)",
        MessageKey::StepSubmit => "2. Click the \"Start scenario\" button",
        MessageKey::PickPrompt => "Click to choose a file",
        MessageKey::DropHint => "or drag and drop the file here",
        MessageKey::Uploading => "Uploading...",
        MessageKey::Starting => "Starting...",
        MessageKey::StartScenario => "Start scenario",
        MessageKey::CreatedBy => "Created by:",
        MessageKey::ScenarioStarted => "scenario started successfully",
        MessageKey::NotCsv => "selected file is not a CSV file",
        MessageKey::TooLarge => "file exceeds the 10MB size limit",
        MessageKey::NoFileSelected => "please choose a file to upload",
        MessageKey::ServerError => "server error: {status}",
        MessageKey::NetworkFailure => "network connection error",
        MessageKey::Aborted => "upload was aborted",
        MessageKey::Unexpected => "an unexpected error occurred while starting the scenario",
    }
}

fn polish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Prześlij plik CSV z leadami i wystartuj scenariusz",
        MessageKey::StepChoose => "1. Wybierz plik CSV do przesłania (maksymalnie 10MB)",
        MessageKey::StepSubmit => "2. Kliknij przycisk \"Wystartuj scenariusz\"",
        MessageKey::PickPrompt => "Kliknij aby wybrać plik",
        MessageKey::DropHint => "lub przeciągnij i upuść plik tutaj",
        MessageKey::Uploading => "Przesyłanie...",
        MessageKey::Starting => "Uruchamianie...",
        MessageKey::StartScenario => "Wystartuj scenariusz",
        MessageKey::CreatedBy => "Stworzone przez:",
        MessageKey::ScenarioStarted => "Scenariusz został pomyślnie uruchomiony!",
        MessageKey::NotCsv => "Proszę wybrać plik w formacie CSV.",
        MessageKey::TooLarge => "Rozmiar pliku przekracza maksymalny limit 10MB.",
        MessageKey::NoFileSelected => "Proszę wybrać plik do przesłania.",
        MessageKey::ServerError => "Błąd serwera: {status}",
        MessageKey::NetworkFailure => "Błąd połączenia sieciowego",
        MessageKey::Aborted => "Przesyłanie zostało przerwane",
        MessageKey::Unexpected => "Wystąpił nieoczekiwany błąd podczas uruchamiania scenariusza.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransportError, ValidationError};

    #[test]
    fn server_error_text_includes_status_code() {
        let err = UploadError::from(TransportError::ServerStatus(503));
        assert_eq!(Locale::English.error_text(&err), "server error: 503");
        assert_eq!(Locale::Polish.error_text(&err), "Błąd serwera: 503");
    }

    #[test]
    fn idle_status_has_no_banner() {
        assert_eq!(Locale::Polish.status_text(&UploadStatus::None), None);
        assert_eq!(
            Locale::English
                .status_text(&UploadStatus::Success(MessageKey::ScenarioStarted))
                .as_deref(),
            Some("scenario started successfully")
        );
        assert_eq!(
            Locale::English
                .status_text(&UploadStatus::Error(ValidationError::NotCsv.into()))
                .as_deref(),
            Some("selected file is not a CSV file")
        );
    }

    #[test]
    fn parses_locale_names() {
        assert_eq!("pl".parse::<Locale>(), Ok(Locale::Polish));
        assert_eq!(" English ".parse::<Locale>(), Ok(Locale::English));
        assert!("de".parse::<Locale>().is_err());
    }
}
