//! File upload handlers.

use std::io;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use futures::SinkExt;
use futures::channel::mpsc;

use socialhub_core::error::AppError;
use socialhub_service::UploadedFile;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Multipart field that carries the file.
const FILE_FIELD: &str = "file";

/// POST /upload
///
/// Streams the `file` field to storage chunk by chunk.
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedFile>), ApiError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let original_name = field.file_name().unwrap_or("upload").to_owned();

        // The field borrows the request body, so chunks are handed to the
        // storage writer through a bounded channel.
        let (mut tx, rx) = mpsc::channel::<Result<Bytes, io::Error>>(8);
        let pump = async move {
            loop {
                let item = match field.chunk().await {
                    Ok(Some(chunk)) => Ok(chunk),
                    Ok(None) => break,
                    Err(e) => Err(io::Error::other(e.body_text())),
                };
                let failed = item.is_err();
                if tx.send(item).await.is_err() || failed {
                    break;
                }
            }
        };

        let (uploaded, ()) = tokio::join!(
            state
                .upload_service
                .upload(&auth, &original_name, Box::pin(rx)),
            pump
        );
        return Ok((StatusCode::CREATED, Json(uploaded?)));
    }

    Err(AppError::validation(format!("Missing multipart field '{FILE_FIELD}'")).into())
}

/// GET /files
pub async fn list_files(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<UploadedFile>>, ApiError> {
    Ok(Json(state.upload_service.list().await?))
}
