//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Any `AppError`
//! (or type convertible into one) becomes an `HttpAppError` through `?` and renders
//! as a JSON `ErrorResponse` with the status its `ErrorMetadata` declares.
//!
//! Non-sensitive errors render with `details` and also carry a
//! `RedactedErrorBody` extension; `middleware::redact_error_details` swaps it in
//! when the configured environment is production.

use axum::{
    body::Bytes,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reel_core::{AppError, ErrorMetadata, LogLevel};
use reel_storage::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
    /// Suggested action for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: both the trait and `AppError` live in other crates)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app_error = match err {
            StorageError::NotFound(key) => AppError::NotFound(format!("Blob not found: {}", key)),
            other => AppError::Storage(other.to_string()),
        };
        HttpAppError(app_error)
    }
}

/// Convert JSON body deserialization failures into a 400 with our ErrorResponse format.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

/// A body that is not `multipart/form-data` at all.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Unable to parse multipart form: {}",
            rejection.body_text()
        )))
    }
}

/// Errors while walking the parts of a multipart body.
impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return HttpAppError(AppError::PayloadTooLarge(
                "Request body exceeds the upload size limit".to_string(),
            ));
        }
        HttpAppError(AppError::InvalidInput(format!(
            "Unable to parse form file: {}",
            err.body_text()
        )))
    }
}

/// JSON body extractor that returns our ErrorResponse format (400 + JSON) on deserialization failure.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

/// Production rendering of an error response, without `details` or `error_type`.
#[derive(Debug, Clone)]
pub struct RedactedErrorBody(pub Bytes);

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let redacted = ErrorResponse {
            error: app_error.client_message(),
            details: None,
            error_type: None,
            code: app_error.error_code().to_string(),
            recoverable: app_error.is_recoverable(),
            suggested_action: app_error.suggested_action().map(String::from),
        };

        // Sensitive errors never carry details, whatever the environment.
        if app_error.is_sensitive() {
            return (status, Json(redacted)).into_response();
        }

        let detailed = ErrorResponse {
            details: Some(app_error.detailed_message()),
            error_type: Some(app_error.error_type().to_string()),
            ..redacted.clone()
        };
        let mut response = (status, Json(detailed)).into_response();
        if let Ok(body) = serde_json::to_vec(&redacted) {
            response
                .extensions_mut()
                .insert(RedactedErrorBody(Bytes::from(body)));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: HttpAppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unsupported_media_type_renders_400() {
        let (status, body) = render(HttpAppError(AppError::UnsupportedMediaType(
            "image/gif".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unsupported MIME type: image/gif");
        assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
        assert_eq!(body["recoverable"], false);
    }

    #[tokio::test]
    async fn test_client_error_carries_details_and_redacted_body() {
        let response =
            HttpAppError(AppError::InvalidInput("Invalid ID".to_string())).into_response();
        let redacted = response
            .extensions()
            .get::<RedactedErrorBody>()
            .cloned()
            .expect("redacted body attached");
        let redacted: serde_json::Value = serde_json::from_slice(&redacted.0).unwrap();
        assert_eq!(redacted["error"], "Invalid ID");
        assert!(redacted.get("details").is_none());

        let (status, body) = render(HttpAppError(AppError::InvalidInput(
            "Invalid ID".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "InvalidInput");
        assert!(body["details"].as_str().unwrap().contains("Invalid ID"));
    }

    #[tokio::test]
    async fn test_storage_error_hides_details() {
        let err = HttpAppError::from(StorageError::UploadFailed(
            "Failed to create file /srv/assets/x.png: permission denied".to_string(),
        ));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to store file");
        assert!(body.get("details").is_none());
        assert!(!body.to_string().contains("/srv/assets"));

        let response = HttpAppError(AppError::Internal("boom".to_string())).into_response();
        assert!(response.extensions().get::<RedactedErrorBody>().is_none());
    }

    #[tokio::test]
    async fn test_storage_not_found_maps_to_404() {
        let (status, body) = render(HttpAppError::from(StorageError::NotFound(
            "gone.png".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unauthorized_renders_401() {
        let (status, body) =
            render(HttpAppError(AppError::Unauthorized("Couldn't find JWT".to_string()))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Couldn't find JWT");
    }
}
