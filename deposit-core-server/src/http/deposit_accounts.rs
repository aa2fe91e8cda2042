use axum::extract::{OriginalUri, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use deposit_core_api::dto::deposit_account::{
    CreateDepositAccountRequest, DepositAccountResponse, InterestQuery, InterestResponse,
    WithdrawRequest, WithdrawResponse,
};
use deposit_core_db::models::deposit_account::DepositAccountDetailsModel;

use super::error::{HttpError, ResultExt};
use super::extract::{ApiQuery, OptionalJson, PathId, ValidatedJson};
use super::state::AppState;
use crate::service::interest::{calculate_interest, can_withdraw};

fn account_not_found(id: i64, path: &str) -> HttpError {
    HttpError::not_found(format!("Compte avec l'ID {id} introuvable"), path)
}

fn to_view(details: &DepositAccountDetailsModel) -> DepositAccountResponse {
    let interest = calculate_interest(details, details.account.withdrawn_at);
    DepositAccountResponse::from_details(details, interest)
}

pub async fn list_deposit_accounts(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<DepositAccountResponse>>, HttpError> {
    let accounts = state.deposit_accounts.list().await.at(uri.path())?;
    Ok(Json(accounts.iter().map(to_view).collect()))
}

pub async fn get_deposit_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(id): PathId,
) -> Result<Json<DepositAccountResponse>, HttpError> {
    state
        .deposit_accounts
        .get_by_id(id)
        .await
        .at(uri.path())?
        .map(|details| Json(to_view(&details)))
        .ok_or_else(|| account_not_found(id, uri.path()))
}

pub async fn list_deposit_accounts_by_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(user_id): PathId,
) -> Result<Json<Vec<DepositAccountResponse>>, HttpError> {
    let accounts = state
        .deposit_accounts
        .list_by_owner(user_id)
        .await
        .at(uri.path())?;
    Ok(Json(accounts.iter().map(to_view).collect()))
}

pub async fn create_deposit_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(request): ValidatedJson<CreateDepositAccountRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let opened_at = request
        .action_date_time
        .unwrap_or_else(|| state.clock.now());

    let details = state
        .deposit_accounts
        .create(
            request.type_compte_depot_id,
            request.user_id,
            request.date_echeance,
            request.montant,
            opened_at,
        )
        .await
        .at(uri.path())?;

    let location = format!("/comptes-depots/{}", details.account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(to_view(&details)),
    ))
}

pub async fn withdraw_deposit_account(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(id): PathId,
    OptionalJson(request): OptionalJson<WithdrawRequest>,
) -> Result<Json<WithdrawResponse>, HttpError> {
    let as_of = request
        .action_date_time
        .unwrap_or_else(|| state.clock.now());

    let (details, interest) = state
        .deposit_accounts
        .withdraw(id, as_of)
        .await
        .at(uri.path())?;

    Ok(Json(WithdrawResponse::new(&details.account, interest, as_of)))
}

/// Interest the account earns, as seen at `actionDateTime` (default: now).
pub async fn get_deposit_account_interest(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    PathId(id): PathId,
    ApiQuery(query): ApiQuery<InterestQuery>,
) -> Result<Json<InterestResponse>, HttpError> {
    let details = state
        .deposit_accounts
        .get_by_id(id)
        .await
        .at(uri.path())?
        .ok_or_else(|| account_not_found(id, uri.path()))?;

    let as_of = query.action_date_time.unwrap_or_else(|| state.clock.now());
    let interest = calculate_interest(&details, Some(as_of));

    Ok(Json(InterestResponse {
        compte_id: details.account.id,
        montant_initial: details.account.principal,
        interet_calcule: interest,
        montant_total: details.account.principal + interest,
        date_calcul: as_of,
        can_withdraw: can_withdraw(&details.account, as_of),
    }))
}
