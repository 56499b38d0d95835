//! Where uploaded files end up.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::Stream;

use crate::result::AppResult;

/// A stored file as seen by [`StorageProvider::list`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Relative to the provider root.
    pub path: String,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Upload body as it arrives from the client.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Backend that persists uploaded files.
///
/// Paths are relative to the provider root. Implementations reject any
/// path that would leave it.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Short backend name for logs, e.g. `"local"`.
    fn provider_type(&self) -> &str;

    /// Drains `stream` into `path` and returns the byte count.
    ///
    /// If the stream yields an error nothing is left at `path`.
    async fn write_stream(&self, path: &str, stream: ByteStream) -> AppResult<u64>;

    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Regular files directly under `path`, sorted by name.
    async fn list(&self, path: &str) -> AppResult<Vec<StorageObjectMeta>>;
}

/// MIME type for the extension of `path`, if it is one we serve.
pub fn mime_from_path(path: &str) -> Option<&'static str> {
    let (_, ext) = path.rsplit_once('.')?;
    Some(match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => return None,
    })
}
