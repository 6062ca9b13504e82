use crate::error::RedactedErrorBody;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Replace detailed error bodies with their redacted form in production.
pub async fn redact_error_details(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let redacted = response.extensions_mut().remove::<RedactedErrorBody>();
    if let Some(RedactedErrorBody(body)) = redacted {
        if state.config.is_production() {
            response.headers_mut().remove(CONTENT_LENGTH);
            *response.body_mut() = Body::from(body);
        }
    }

    response
}
