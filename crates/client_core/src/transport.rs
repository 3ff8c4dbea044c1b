//! Multipart upload of a picked file to the webhook, with progress reporting.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream, Stream};
use reqwest::{
    multipart::{Form, Part},
    Body, Client,
};
use shared::{
    domain::{FileDescriptor, TransferProgress},
    error::TransportError,
};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::UploaderSettings;

/// Multipart field the webhook reads the CSV from.
pub const FILE_FIELD: &str = "file";

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Failure while producing the request body, after the request was started.
#[derive(Debug, thiserror::Error)]
#[error("upload body stream failed: {0}")]
pub struct BodyStreamError(#[from] std::io::Error);

/// Receives byte counters while a request body is streamed.
///
/// May be called zero or more times before the upload future resolves.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, progress: TransferProgress);
}

#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(
        &self,
        file: &FileDescriptor,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<(), TransportError>;
}

pub struct HttpUploadTransport {
    http: Client,
    endpoint: Url,
    max_file_size: u64,
    chunk_size: usize,
}

impl HttpUploadTransport {
    pub fn new(settings: &UploaderSettings) -> Self {
        Self {
            http: Client::new(),
            endpoint: settings.endpoint.clone(),
            max_file_size: settings.max_file_size,
            chunk_size: settings.chunk_size.max(1),
        }
    }

    fn build_form<R>(
        &self,
        file: &FileDescriptor,
        reader: R,
        total: u64,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<Form, TransportError>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let body = Body::wrap_stream(progress_stream(reader, total, self.chunk_size, observer));
        let media_type = file.media_type.as_deref().unwrap_or(FALLBACK_MEDIA_TYPE);
        let part = Part::stream_with_length(body, total)
            .file_name(file.name.clone())
            .mime_str(media_type)
            .map_err(|err| {
                warn!(media_type, "invalid media type for multipart part: {err}");
                TransportError::Unexpected
            })?;
        Ok(Form::new().part(FILE_FIELD, part))
    }

    /// Posts `total` bytes read from `reader` as the file part.
    async fn post_body<R>(
        &self,
        file: &FileDescriptor,
        reader: R,
        total: u64,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<(), TransportError>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let form = self.build_form(file, reader, total, observer)?;

        info!(
            file = %file.name,
            size_bytes = total,
            endpoint = %self.endpoint,
            "posting multipart upload"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                let classified = classify_request_error(&err);
                warn!(error = %err, ?classified, "upload request failed");
                classified
            })?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "webhook accepted upload");
            Ok(())
        } else {
            warn!(status = status.as_u16(), "webhook rejected upload");
            Err(TransportError::ServerStatus(status.as_u16()))
        }
    }
}

#[async_trait]
impl UploadTransport for HttpUploadTransport {
    async fn upload(
        &self,
        file: &FileDescriptor,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<(), TransportError> {
        let handle = tokio::fs::File::open(&file.path).await.map_err(|err| {
            warn!(path = %file.path.display(), "failed to open file for upload: {err}");
            TransportError::Unexpected
        })?;
        let total = handle
            .metadata()
            .await
            .map_err(|err| {
                warn!(path = %file.path.display(), "failed to stat file for upload: {err}");
                TransportError::Unexpected
            })?
            .len();
        if total > self.max_file_size {
            warn!(
                file = %file.name,
                size_bytes = total,
                max_file_size = self.max_file_size,
                "file grew past the size limit after it was selected"
            );
            return Err(TransportError::Unexpected);
        }

        self.post_body(file, handle, total, observer).await
    }
}

struct BodyCursor<R> {
    reader: R,
    sent: u64,
    total: u64,
    chunk_size: usize,
    observer: Arc<dyn ProgressObserver>,
}

/// Reads exactly `total` bytes from `reader` in chunks and reports the running
/// byte count as each chunk is handed to the HTTP client. A short or failed
/// read ends the stream with [`BodyStreamError`].
fn progress_stream<R>(
    reader: R,
    total: u64,
    chunk_size: usize,
    observer: Arc<dyn ProgressObserver>,
) -> impl Stream<Item = Result<Bytes, BodyStreamError>> + Send + 'static
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let cursor = BodyCursor {
        reader,
        sent: 0,
        total,
        chunk_size: chunk_size.max(1),
        observer,
    };
    stream::unfold(Some(cursor), |cursor| async move {
        let mut cursor = cursor?;
        if cursor.sent >= cursor.total {
            return None;
        }
        let want = (cursor.total - cursor.sent).min(cursor.chunk_size as u64) as usize;
        let mut chunk = vec![0u8; want];
        match cursor.reader.read_exact(&mut chunk).await {
            Ok(_) => {
                cursor.sent += want as u64;
                debug!(bytes_sent = cursor.sent, bytes_total = cursor.total, "upload progress");
                cursor
                    .observer
                    .on_progress(TransferProgress::new(cursor.sent, Some(cursor.total)));
                Some((Ok(Bytes::from(chunk)), Some(cursor)))
            }
            Err(err) => {
                warn!(
                    bytes_sent = cursor.sent,
                    bytes_total = cursor.total,
                    "upload body read failed: {err}"
                );
                Some((Err(BodyStreamError::from(err)), None))
            }
        }
    })
}

/// Whether a [`BodyStreamError`] sits anywhere in the error's source chain.
fn caused_by_body_stream(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if cause.downcast_ref::<BodyStreamError>().is_some() {
            return true;
        }
        source = cause.source();
    }
    false
}

pub fn classify_request_error(err: &reqwest::Error) -> TransportError {
    if err.is_body() || caused_by_body_stream(err) {
        TransportError::Aborted
    } else if err.is_connect() || err.is_timeout() || err.is_request() {
        TransportError::NetworkFailure
    } else {
        TransportError::Unexpected
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
