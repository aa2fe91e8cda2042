//! Extractors that turn every malformed request into the standard error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use deposit_core_api::error::ApiError;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::HttpError;

fn invalid(detail: impl Into<String>, path: &str) -> HttpError {
    HttpError::new(ApiError::ValidationError(detail.into()), path)
}

/// JSON body that must be present, decode and pass `validator` rules.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| invalid(rejection.body_text(), &path))?;
        value
            .validate()
            .map_err(|errors| invalid(errors.to_string(), &path))?;
        Ok(Self(value))
    }
}

/// JSON body that may be omitted entirely; an empty body yields `T::default()`.
pub struct OptionalJson<T>(pub T);

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| invalid(rejection.body_text(), &path))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: T =
            serde_json::from_slice(&bytes).map_err(|error| invalid(error.to_string(), &path))?;
        value
            .validate()
            .map_err(|errors| invalid(errors.to_string(), &path))?;
        Ok(Self(value))
    }
}

/// Single numeric path parameter.
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|rejection| invalid(rejection.body_text(), &path))
    }
}

/// Query string decoded into `T`.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| invalid(rejection.body_text(), &path))
    }
}
