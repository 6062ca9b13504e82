use crate::auth::Caller;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::path::VideoId;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use reel_core::models::{NewVideo, Video};
use reel_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body = NewVideo,
    responses(
        (status = 201, description = "Draft video created", body = Video),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, caller, new_video),
    fields(user_id = %caller.user_id, operation = "create_video")
)]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    caller: Caller,
    ValidatedJson(new_video): ValidatedJson<NewVideo>,
) -> Result<impl IntoResponse, HttpAppError> {
    if new_video.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title is required".to_string()).into());
    }

    let video = state.videos.create_video(caller.user_id, new_video).await?;

    tracing::info!(video_id = %video.id, "Draft video created");
    Ok((StatusCode::CREATED, Json(video)))
}

#[utoipa::path(
    get,
    path = "/api/videos/{video_id}",
    tag = "videos",
    params(
        ("video_id" = uuid::Uuid, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video found", body = Video),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, video_id, caller),
    fields(
        user_id = %caller.user_id,
        video_id = %video_id.0,
        operation = "get_video"
    )
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    video_id: VideoId,
    caller: Caller,
) -> Result<Json<Video>, HttpAppError> {
    let video = state
        .videos
        .get_video(video_id.0)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't find video".to_string()))?;

    Ok(Json(video))
}
