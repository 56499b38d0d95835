//! Uploads kept in a directory on the local disk.

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use socialhub_core::error::{AppError, ErrorKind};
use socialhub_core::result::AppResult;
use socialhub_core::traits::{ByteStream, StorageObjectMeta, StorageProvider, mime_from_path};

fn storage_error(context: impl Into<String>, err: io::Error) -> AppError {
    AppError::with_source(ErrorKind::Storage, context, err)
}

/// Stores files under a single root directory.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Uses `root_path` as the root, creating it if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root)
            .await
            .map_err(|e| storage_error(format!("Cannot create {}", root.display()), e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `path` onto the root. Only plain segments are allowed.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(AppError::validation(format!("Invalid storage path: {path}")));
        }
        Ok(self.root.join(relative))
    }

    async fn drain_into(file: &mut fs::File, mut stream: ByteStream) -> io::Result<u64> {
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok(written)
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn write_stream(&self, path: &str, stream: ByteStream) -> AppResult<u64> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error(format!("Cannot create {}", parent.display()), e))?;
        }

        let mut file = fs::File::create(&target)
            .await
            .map_err(|e| storage_error(format!("Cannot create {path}"), e))?;

        match Self::drain_into(&mut file, stream).await {
            Ok(written) => {
                debug!(path, bytes = written, "Stored file");
                Ok(written)
            }
            Err(e) => {
                drop(file);
                if let Err(cleanup) = fs::remove_file(&target).await {
                    warn!(path, error = %cleanup, "Could not remove partial file");
                }
                Err(storage_error(format!("Failed writing {path}"), e))
            }
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let target = self.resolve(path)?;
        Ok(fs::try_exists(&target).await.unwrap_or(false))
    }

    async fn list(&self, path: &str) -> AppResult<Vec<StorageObjectMeta>> {
        let dir_path = self.resolve(path)?;
        let mut dir = match fs::read_dir(&dir_path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error(format!("Cannot list {path}"), e)),
        };

        let prefix = path.trim_matches('/');
        let mut objects = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| storage_error("Cannot read directory entry", e))?
        {
            let meta = entry
                .metadata()
                .await
                .map_err(|e| storage_error("Cannot stat directory entry", e))?;
            if !meta.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let path = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            objects.push(StorageObjectMeta {
                mime_type: mime_from_path(&path).map(String::from),
                size_bytes: meta.len(),
                last_modified: meta.modified().ok().map(DateTime::<Utc>::from),
                path,
            });
        }

        objects.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(objects)
    }
}
