//! Core of the scenario uploader: file validation, the upload form state
//! machine, and the HTTP transport that posts the CSV to the webhook.

pub mod config;
pub mod form;
pub mod picker;
pub mod transport;
pub mod validation;

pub use config::{UploaderSettings, WEBHOOK_URL};
pub use form::{PickOutcome, Submission, UploadForm};
pub use picker::{describe_path, PickerInput};
pub use transport::{HttpUploadTransport, ProgressObserver, UploadTransport};
pub use validation::validate_selection;
