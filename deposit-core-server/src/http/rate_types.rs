use axum::extract::{OriginalUri, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use deposit_core_api::dto::rate_type::{RateTypeRequest, RateTypeResponse};

use super::error::{HttpError, ResultExt};
use super::extract::{PathId, ValidatedJson};
use super::state::AppState;

fn rate_type_not_found(id: i64, path: &str) -> HttpError {
    HttpError::not_found(format!("Type de compte avec l'ID {id} introuvable"), path)
}

pub async fn list_rate_types(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<RateTypeResponse>>, HttpError> {
    let rate_types = state.rate_types.list().await.at(uri.path())?;
    Ok(Json(rate_types.into_iter().map(RateTypeResponse::from).collect()))
}

pub async fn get_rate_type(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(id): PathId,
) -> Result<Json<RateTypeResponse>, HttpError> {
    state
        .rate_types
        .get_by_id(id)
        .await
        .at(uri.path())?
        .map(|rate_type| Json(RateTypeResponse::from(rate_type)))
        .ok_or_else(|| rate_type_not_found(id, uri.path()))
}

pub async fn create_rate_type(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(request): ValidatedJson<RateTypeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let saved = state
        .rate_types
        .create(&request.nom, request.taux_interet)
        .await
        .at(uri.path())?;

    let location = format!("/type-comptes-depots/{}", saved.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RateTypeResponse::from(saved)),
    ))
}

pub async fn update_rate_type(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(id): PathId,
    ValidatedJson(request): ValidatedJson<RateTypeRequest>,
) -> Result<Json<RateTypeResponse>, HttpError> {
    state
        .rate_types
        .update(id, &request.nom, request.taux_interet)
        .await
        .at(uri.path())?
        .map(|rate_type| Json(RateTypeResponse::from(rate_type)))
        .ok_or_else(|| rate_type_not_found(id, uri.path()))
}

/// Deletes the rate type together with its deposit accounts.
pub async fn delete_rate_type(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(id): PathId,
) -> Result<StatusCode, HttpError> {
    if state.rate_types.delete(id).await.at(uri.path())? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(rate_type_not_found(id, uri.path()))
    }
}
