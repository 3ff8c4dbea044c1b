use shared::domain::MAX_FILE_SIZE_BYTES;
use url::Url;

/// Webhook that starts the lead scenario once it receives the CSV.
pub const WEBHOOK_URL: &str =
    "https://cloud.lfgcloud.win/webhook/cef18d86-c73a-4f8e-969b-ae11cdc70fe8";

/// Size of the body slices handed to the HTTP client; one progress tick per slice.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploaderSettings {
    pub endpoint: Url,
    pub max_file_size: u64,
    pub chunk_size: usize,
}

impl UploaderSettings {
    /// Settings built from the compile-time webhook URL and size ceiling.
    pub fn from_constants() -> Result<Self, url::ParseError> {
        Self::with_endpoint(WEBHOOK_URL)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            max_file_size: MAX_FILE_SIZE_BYTES,
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
    }
}
