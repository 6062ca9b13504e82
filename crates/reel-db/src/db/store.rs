use async_trait::async_trait;
use reel_core::models::{NewVideo, Video};
use reel_core::AppError;
use uuid::Uuid;

/// Video record store
///
/// Narrow capability interface over whatever persists video metadata. The
/// thumbnail flow only needs `get_video` and `update_video`.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Fetch a record by id; `Ok(None)` when no such record exists.
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// Persist every mutable field of an existing record.
    ///
    /// Returns `AppError::NotFound` when the record no longer exists.
    async fn update_video(&self, video: &Video) -> Result<(), AppError>;

    /// Create a draft record owned by `user_id`.
    async fn create_video(&self, user_id: Uuid, new_video: NewVideo) -> Result<Video, AppError>;
}
