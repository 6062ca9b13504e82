//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use reel_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reel API",
        version = "0.1.0",
        description = "Video metadata and thumbnail upload API. Thumbnails are stored on local disk and served under /assets/."
    ),
    paths(
        handlers::videos::create_video,
        handlers::videos::get_video,
        handlers::thumbnail_upload::upload_thumbnail,
        handlers::health::liveness_check,
    ),
    components(
        schemas(
            models::Video,
            models::NewVideo,
            error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "videos", description = "Video records and thumbnail uploads"),
        (name = "health", description = "Liveness checks")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by authenticated paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
