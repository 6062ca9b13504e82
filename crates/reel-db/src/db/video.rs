use async_trait::async_trait;
use reel_core::models::{NewVideo, Video};
use reel_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use super::store::VideoStore;

/// Postgres-backed video record store
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<Postgres, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(video)
    }

    #[tracing::instrument(
        skip(self, video),
        fields(db.table = "videos", db.operation = "update", video_id = %video.id)
    )]
    async fn update_video(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $2,
                description = $3,
                thumbnail_url = $4,
                video_url = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self, new_video), fields(db.table = "videos", db.operation = "insert"))]
    async fn create_video(&self, user_id: Uuid, new_video: NewVideo) -> Result<Video, AppError> {
        let draft = Video::draft(user_id, new_video);

        let video = sqlx::query_as::<Postgres, Video>(
            r#"
            INSERT INTO videos (id, user_id, title, description, thumbnail_url, video_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(draft.id)
        .bind(draft.user_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.thumbnail_url)
        .bind(&draft.video_url)
        .bind(draft.created_at)
        .bind(draft.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(video)
    }
}
