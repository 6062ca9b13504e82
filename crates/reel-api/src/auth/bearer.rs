use axum::http::{header::AUTHORIZATION, HeaderMap};
use reel_core::AppError;

const BEARER_SCHEME: &str = "Bearer";

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Couldn't find JWT".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    let (scheme, token) = auth_header
        .split_once(' ')
        .ok_or_else(|| AppError::Unauthorized("Malformed authorization header".to_string()))?;
    if scheme != BEARER_SCHEME {
        return Err(AppError::Unauthorized(
            "Authorization scheme must be Bearer".to_string(),
        ));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized("Couldn't find JWT".to_string()));
    }
    Ok(token)
}
