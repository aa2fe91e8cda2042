use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use deposit_core_api::dto::error_body::ErrorBody;
use deposit_core_api::error::{ApiError, ApiResult};

/// An `ApiError` bound to the request path it occurred on.
#[derive(Debug)]
pub struct HttpError {
    pub error: ApiError,
    pub path: String,
}

impl HttpError {
    pub fn new(error: ApiError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ApiError::NotFound(message.into()), path)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.error.is_server_error() {
            tracing::error!(path = %self.path, error = %self.error, "request failed");
        } else {
            tracing::warn!(path = %self.path, error = %self.error, "request rejected");
        }

        let body = ErrorBody::new(
            status.as_u16(),
            self.error.client_message(),
            self.path,
            Utc::now().timestamp_millis(),
        );
        (status, Json(body)).into_response()
    }
}

/// Attaches the request path to a service result.
pub trait ResultExt<T> {
    fn at(self, path: &str) -> Result<T, HttpError>;
}

impl<T> ResultExt<T> for ApiResult<T> {
    fn at(self, path: &str) -> Result<T, HttpError> {
        self.map_err(|error| HttpError::new(error, path))
    }
}
