//! Single-request file uploads into the upload directory.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use socialhub_core::config::StorageConfig;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::traits::{ByteStream, StorageObjectMeta, StorageProvider, mime_from_path};

use crate::context::RequestContext;

/// A stored upload as reported back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedFile {
    /// Name under which the file was stored.
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
    /// Public URL of the file.
    pub url: String,
}

/// Streams uploads to the storage provider with a size cap.
#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn StorageProvider>,
    config: StorageConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("provider", &self.storage.provider_type())
            .finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(storage: Arc<dyn StorageProvider>, config: StorageConfig) -> Self {
        Self { storage, config }
    }

    /// Stores `body` under a unique name derived from `original_name`.
    ///
    /// Uploads larger than `max_upload_size_bytes` fail validation and
    /// leave nothing behind.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        original_name: &str,
        body: ByteStream,
    ) -> AppResult<UploadedFile> {
        let file_name = format!(
            "{}_{}",
            Uuid::new_v4().simple(),
            sanitize_file_name(original_name)
        );
        let limit = self.config.max_upload_size_bytes;
        let exceeded = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&exceeded);
        let mut seen: u64 = 0;
        let limited: ByteStream = Box::pin(body.map(move |chunk| {
            let chunk = chunk?;
            seen += chunk.len() as u64;
            if seen > limit {
                flag.store(true, Ordering::Relaxed);
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "upload exceeds size limit",
                ));
            }
            Ok(chunk)
        }));

        let size_bytes = match self.storage.write_stream(&file_name, limited).await {
            Ok(n) => n,
            Err(_) if exceeded.load(Ordering::Relaxed) => {
                warn!(user_id = %ctx.user_id, limit, "Rejected oversized upload");
                return Err(AppError::validation(format!(
                    "File exceeds maximum upload size of {limit} bytes"
                )));
            }
            Err(e) => return Err(e),
        };

        info!(
            user_id = %ctx.user_id,
            file_name = %file_name,
            size_bytes,
            "File uploaded"
        );

        Ok(UploadedFile {
            mime_type: mime_from_path(&file_name).map(String::from),
            url: self.public_url(&file_name),
            file_name,
            size_bytes,
        })
    }

    /// Files currently in the upload directory.
    pub async fn list(&self) -> AppResult<Vec<UploadedFile>> {
        let objects = self.storage.list("").await?;
        Ok(objects.into_iter().map(|o| self.describe(o)).collect())
    }

    fn describe(&self, object: StorageObjectMeta) -> UploadedFile {
        UploadedFile {
            url: self.public_url(&object.path),
            file_name: object.path,
            size_bytes: object.size_bytes,
            mime_type: object.mime_type,
        }
    }

    fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.config.public_path.trim_end_matches('/'), file_name)
    }
}

/// Reduces a client-supplied name to a safe single path segment.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .take(200)
        .collect();

    let sanitized = sanitized.trim_start_matches('.');
    if sanitized.is_empty() {
        "unnamed_file".to_string()
    } else {
        sanitized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bytes::Bytes;
    use socialhub_core::types::id::UserId;
    use socialhub_storage::LocalStorageProvider;

    fn ctx() -> RequestContext {
        RequestContext::new(UserId::from(1), Some(Uuid::new_v4()), None)
    }

    async fn service(dir: &Path, max: u64) -> UploadService {
        let storage = LocalStorageProvider::new(&dir.display().to_string())
            .await
            .unwrap();
        let config = StorageConfig {
            upload_dir: dir.display().to_string(),
            max_upload_size_bytes: max,
            public_path: "/uploads".to_string(),
        };
        UploadService::new(Arc::new(storage), config)
    }

    fn body(chunks: &[&'static str]) -> ByteStream {
        let chunks: Vec<_> = chunks
            .iter()
            .map(|c| Ok(Bytes::from_static(c.as_bytes())))
            .collect();
        Box::pin(futures::stream::iter(chunks))
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("my photo.png"), "my_photo.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("..."), "unnamed_file");
        assert_eq!(sanitize_file_name(""), "unnamed_file");
    }

    #[tokio::test]
    async fn test_upload_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path(), 1024).await;

        let uploaded = svc
            .upload(&ctx(), "cat.png", body(&["abc", "def"]))
            .await
            .unwrap();
        assert_eq!(uploaded.size_bytes, 6);
        assert!(uploaded.file_name.ends_with("_cat.png"));
        assert_eq!(uploaded.url, format!("/uploads/{}", uploaded.file_name));
        assert_eq!(uploaded.mime_type.as_deref(), Some("image/png"));

        let files = svc.list().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, uploaded.file_name);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path(), 4).await;

        let err = svc
            .upload(&ctx(), "big.txt", body(&["abc", "def"]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, socialhub_core::error::ErrorKind::Validation);
        assert!(svc.list().await.unwrap().is_empty());
    }
}
