//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::constants::{
    API_PREFIX, ASSETS_ROUTE, MAX_CONCURRENT_REQUESTS, THUMBNAIL_UPLOAD_ROUTE,
};
use crate::handlers;
use crate::middleware::redact_error_details;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use reel_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let config = &state.config;
    let cors = setup_cors(config)?;

    // The part streams to disk, so the body is only capped when configured.
    let upload_limit = match config.max_upload_size_bytes {
        Some(max_bytes) => DefaultBodyLimit::max(max_bytes),
        None => DefaultBodyLimit::disable(),
    };
    let upload_routes = Router::new()
        .route(
            THUMBNAIL_UPLOAD_ROUTE,
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .route(
            &format!("{}{}", API_PREFIX, THUMBNAIL_UPLOAD_ROUTE),
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .layer(upload_limit);

    let api_routes = Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            post(handlers::videos::create_video),
        )
        .route(
            &format!("{}/videos/{{video_id}}", API_PREFIX),
            get(handlers::videos::get_video),
        )
        .merge(upload_routes);

    tracing::info!(
        assets_root = %config.assets_root().display(),
        route = ASSETS_ROUTE,
        "Serving thumbnails from local storage"
    );

    let app = Router::new()
        .route("/health", get(handlers::health::liveness_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .merge(api_routes)
        .nest_service(ASSETS_ROUTE, ServeDir::new(config.assets_root()))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            redact_error_details,
        ))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|_| anyhow::anyhow!("Invalid CORS origin: {}", o))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
