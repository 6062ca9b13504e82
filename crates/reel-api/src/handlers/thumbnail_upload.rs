use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use futures::TryStreamExt;
use reel_core::models::{ThumbnailMediaType, Video};
use reel_core::AppError;
use reel_storage::keys::thumbnail_filename;
use reel_storage::Storage;
use tokio_util::io::StreamReader;
use uuid::Uuid;

use crate::auth::Caller;
use crate::constants::THUMBNAIL_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::path::VideoId;
use crate::state::AppState;

/// Upload thumbnail handler
///
/// Streams the `thumbnail` part of a multipart body into a freshly named blob
/// and points the video record at it. Also mounted under `/api`.
///
/// # Errors
/// - `AppError::InvalidInput` - Bad video ID, body not multipart, or no `thumbnail` part
/// - `AppError::Unauthorized` - Missing or invalid bearer token
/// - `AppError::MalformedMediaType` - Part Content-Type cannot be parsed
/// - `AppError::UnsupportedMediaType` - Part is not image/jpeg or image/png
/// - `AppError::Internal` - No record for the video ID
/// - `AppError::PayloadTooLarge` - Body exceeds `MAX_UPLOAD_SIZE_MB`, when set
/// - `AppError::Storage` / `AppError::Database` - Record lookup, blob write or record update failed
#[utoipa::path(
    post,
    path = "/videos/{video_id}/thumbnail",
    tag = "videos",
    params(
        ("video_id" = uuid::Uuid, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Form with a `thumbnail` file part (image/jpeg or image/png)"),
    responses(
        (status = 200, description = "Thumbnail stored; updated video record", body = Video),
        (status = 400, description = "Invalid ID, form or media type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 413, description = "Body exceeds the configured upload cap", body = ErrorResponse),
        (status = 500, description = "Malformed part media type, unknown video, or storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, video_id, caller, multipart),
    fields(
        user_id = %caller.user_id,
        video_id = %video_id.0,
        operation = "upload_thumbnail"
    )
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    video_id: VideoId,
    caller: Caller,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Video>, HttpAppError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(THUMBNAIL_FIELD) {
            continue;
        }
        return store_thumbnail(&state, video_id.0, field).await.map(Json);
    }

    Err(AppError::InvalidInput(format!(
        "Unable to parse form file: missing '{}' part",
        THUMBNAIL_FIELD
    ))
    .into())
}

async fn store_thumbnail(
    state: &AppState,
    video_id: Uuid,
    field: Field<'_>,
) -> Result<Video, HttpAppError> {
    let media_type = ThumbnailMediaType::parse(field.content_type())?;

    let mut video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Couldn't find video {}", video_id)))?;

    let filename = thumbnail_filename(media_type.extension());
    let start = std::time::Instant::now();

    // The body limit surfaces as a read error inside the copy; remember it so
    // the client sees 413 rather than a storage failure.
    let body_too_large = AtomicBool::new(false);
    let stream = field.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            body_too_large.store(true, Ordering::Relaxed);
        }
        io::Error::other(e)
    });
    let mut reader = StreamReader::new(Box::pin(stream));

    let blob = match state
        .storage
        .upload_stream(&filename, media_type.as_str(), &mut reader)
        .await
    {
        Ok(blob) => blob,
        Err(_) if body_too_large.load(Ordering::Relaxed) => {
            return Err(AppError::PayloadTooLarge(
                "Request body exceeds the upload size limit".to_string(),
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    video.set_thumbnail_url(blob.url.clone());
    if let Err(e) = state.videos.update_video(&video).await {
        discard_blob(state.storage.as_ref(), &blob.key).await;
        return Err(e.into());
    }

    tracing::info!(
        storage_key = %blob.key,
        media_type = %media_type,
        size_bytes = blob.size_bytes,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Thumbnail uploaded"
    );

    Ok(video)
}

/// Remove a blob nothing points at any more.
async fn discard_blob(storage: &dyn Storage, storage_key: &str) {
    if let Err(cleanup_err) = storage.delete(storage_key).await {
        tracing::warn!(
            error = %cleanup_err,
            storage_key = %storage_key,
            "Failed to cleanup storage file after record update error"
        );
    }
}
