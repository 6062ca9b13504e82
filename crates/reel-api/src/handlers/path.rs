use crate::error::HttpAppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use reel_core::AppError;
use uuid::Uuid;

/// `{video_id}` path segment parsed as a UUID.
///
/// Runs before authentication so a malformed ID is reported as 400 even for
/// anonymous callers.
#[derive(Debug, Clone, Copy)]
pub struct VideoId(pub Uuid);

impl<S> FromRequestParts<S> for VideoId
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidInput("Invalid ID".to_string()))?;
        let id = Uuid::parse_str(&raw)
            .map_err(|_| AppError::InvalidInput("Invalid ID".to_string()))?;
        Ok(VideoId(id))
    }
}
