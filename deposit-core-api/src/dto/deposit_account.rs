use chrono::NaiveDateTime;
use deposit_core_db::models::deposit_account::{DepositAccountDetailsModel, DepositAccountModel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::datetime::flexible_datetime;

/// Body of `POST /comptes-depots`.
///
/// `action_date_time` overrides the opening timestamp, which is "now" otherwise.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositAccountRequest {
    pub type_compte_depot_id: i64,
    pub user_id: i64,
    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    pub date_echeance: NaiveDateTime,
    #[validate(custom(function = "validate_positive_amount"))]
    pub montant: Decimal,
    #[serde(default, deserialize_with = "flexible_datetime::option::deserialize")]
    pub action_date_time: Option<NaiveDateTime>,
}

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        return Err(ValidationError::new("positive_amount"));
    }
    Ok(())
}

/// Body of `POST /comptes-depots/{id}/withdraw`. An empty body means "withdraw now".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    #[serde(default, deserialize_with = "flexible_datetime::option::deserialize")]
    pub action_date_time: Option<NaiveDateTime>,
}

/// Query string of `GET /comptes-depots/{id}/interest`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestQuery {
    #[serde(default, deserialize_with = "flexible_datetime::option::deserialize")]
    pub action_date_time: Option<NaiveDateTime>,
}

/// Account view returned by every account read and by creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAccountResponse {
    pub id: i64,
    pub type_compte_depot_id: i64,
    pub type_compte_depot_nom: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub taux_interet: Decimal,
    pub user_id: i64,
    pub date_ouverture: NaiveDateTime,
    pub date_echeance: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant: Decimal,
    pub est_retire: bool,
    pub date_retire: Option<NaiveDateTime>,
    #[serde(with = "rust_decimal::serde::float")]
    pub interet_calcule: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_total: Decimal,
}

impl DepositAccountResponse {
    /// Builds the view from an account joined with its rate type and the interest it earns.
    pub fn from_details(details: &DepositAccountDetailsModel, interest: Decimal) -> Self {
        let account = &details.account;
        Self {
            id: account.id,
            type_compte_depot_id: account.rate_type_id,
            type_compte_depot_nom: details.rate_type.name.as_str().to_string(),
            taux_interet: details.rate_type.rate,
            user_id: account.owner_id,
            date_ouverture: account.opened_at,
            date_echeance: account.matures_at,
            montant: account.principal,
            est_retire: account.withdrawn,
            date_retire: account.withdrawn_at,
            interet_calcule: interest,
            montant_total: account.principal + interest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    pub compte_depot_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_initial: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub interet_calcule: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_total: Decimal,
    pub date_retire: NaiveDateTime,
    pub message: String,
}

impl WithdrawResponse {
    pub fn new(account: &DepositAccountModel, interest: Decimal, withdrawn_at: NaiveDateTime) -> Self {
        let total = account.principal + interest;
        let message = format!(
            "Retrait effectué avec succès. Montant total: {:.2} MGA (Initial: {:.2} + Intérêts: {:.2})",
            total.round_dp(2),
            account.principal.round_dp(2),
            interest.round_dp(2)
        );
        Self {
            compte_depot_id: account.id,
            montant_initial: account.principal,
            interet_calcule: interest,
            montant_total: total,
            date_retire: account.withdrawn_at.unwrap_or(withdrawn_at),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestResponse {
    pub compte_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_initial: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub interet_calcule: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_total: Decimal,
    pub date_calcul: NaiveDateTime,
    pub can_withdraw: bool,
}
