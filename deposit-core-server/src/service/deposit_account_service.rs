use std::sync::Arc;

use chrono::NaiveDateTime;
use deposit_core_api::error::{ApiError, ApiResult};
use deposit_core_api::service::user_directory::UserDirectory;
use deposit_core_db::models::deposit_account::{DepositAccountDetailsModel, NewDepositAccountModel};
use deposit_core_db::repository::deposit_account_repository::DepositAccountRepository;
use deposit_core_db::repository::rate_type_repository::RateTypeRepository;
use deposit_core_db::repository::{Create, FindAll, FindById, FindByOwnerId, MarkWithdrawn};
use rust_decimal::Decimal;
use sqlx::Postgres;

use super::interest;

/// Smallest principal: one cent.
pub const MIN_PRINCIPAL: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest principal that fits `NUMERIC(15,2)`.
pub const MAX_PRINCIPAL: Decimal = Decimal::from_parts(0xA4C6_7FFF, 0x0003_8D7E, 0, false, 2);

const PRINCIPAL_SCALE: u32 = 2;

/// Ledger of deposit accounts.
///
/// Methods take the effective timestamp explicitly; the HTTP layer resolves
/// "now" from its clock when the caller does not supply one.
pub struct DepositAccountService {
    accounts: Arc<dyn DepositAccountRepository<Postgres>>,
    rate_types: Arc<dyn RateTypeRepository<Postgres>>,
    users: Arc<dyn UserDirectory>,
}

impl DepositAccountService {
    pub fn new(
        accounts: Arc<dyn DepositAccountRepository<Postgres>>,
        rate_types: Arc<dyn RateTypeRepository<Postgres>>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            accounts,
            rate_types,
            users,
        }
    }

    /// All accounts, newest first.
    pub async fn list(&self) -> ApiResult<Vec<DepositAccountDetailsModel>> {
        Ok(self.accounts.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<Option<DepositAccountDetailsModel>> {
        Ok(self.accounts.find_by_id(id).await?)
    }

    /// Accounts of one owner, newest first. The owner is not looked up in the directory.
    pub async fn list_by_owner(&self, owner_id: i64) -> ApiResult<Vec<DepositAccountDetailsModel>> {
        Ok(self.accounts.find_by_owner_id(owner_id).await?)
    }

    /// Opens an account at `opened_at`.
    pub async fn create(
        &self,
        rate_type_id: i64,
        owner_id: i64,
        matures_at: NaiveDateTime,
        principal: Decimal,
        opened_at: NaiveDateTime,
    ) -> ApiResult<DepositAccountDetailsModel> {
        if !self.users.exists(owner_id).await {
            return Err(ApiError::InvalidArgument(format!(
                "L'utilisateur avec l'ID {owner_id} n'existe pas"
            )));
        }

        let rate_type = self
            .rate_types
            .find_by_id(rate_type_id)
            .await?
            .ok_or_else(|| {
                ApiError::InvalidArgument(format!(
                    "Le type de compte avec l'ID {rate_type_id} n'existe pas"
                ))
            })?;

        check_principal(principal)?;

        if matures_at <= opened_at {
            return Err(ApiError::InvalidArgument(
                "La date d'échéance doit être postérieure à la date d'ouverture".to_string(),
            ));
        }

        let account = self
            .accounts
            .create(NewDepositAccountModel {
                rate_type_id,
                owner_id,
                opened_at,
                matures_at,
                principal,
            })
            .await?;

        tracing::info!(
            account_id = account.id,
            owner_id,
            rate_type_id,
            principal = %account.principal,
            matures_at = %account.matures_at,
            "deposit account opened"
        );

        Ok(DepositAccountDetailsModel { account, rate_type })
    }

    /// Withdraws the account at `as_of` and returns it with the interest paid.
    pub async fn withdraw(
        &self,
        id: i64,
        as_of: NaiveDateTime,
    ) -> ApiResult<(DepositAccountDetailsModel, Decimal)> {
        let details = self.accounts.find_by_id(id).await?.ok_or_else(|| {
            ApiError::InvalidArgument(format!("Le compte avec l'ID {id} n'existe pas"))
        })?;

        if details.account.withdrawn {
            return Err(already_withdrawn());
        }

        if as_of < details.account.matures_at {
            return Err(ApiError::InvalidOperation(format!(
                "Le retrait n'est pas autorisé avant la date d'échéance ({})",
                details.account.matures_at.format("%Y-%m-%d %H:%M:%S")
            )));
        }

        let interest = interest::calculate_interest(&details, Some(as_of));

        let account = self
            .accounts
            .mark_withdrawn(id, as_of)
            .await?
            .ok_or_else(|| {
                tracing::warn!(account_id = id, "lost a concurrent withdrawal");
                already_withdrawn()
            })?;

        tracing::info!(
            account_id = id,
            %interest,
            withdrawn_at = %as_of,
            "deposit account withdrawn"
        );

        Ok((
            DepositAccountDetailsModel {
                account,
                rate_type: details.rate_type,
            },
            interest,
        ))
    }
}

fn check_principal(principal: Decimal) -> ApiResult<()> {
    if principal < MIN_PRINCIPAL {
        return Err(ApiError::InvalidArgument(
            "Le montant doit être positif".to_string(),
        ));
    }
    if principal.normalize().scale() > PRINCIPAL_SCALE {
        return Err(ApiError::InvalidArgument(
            "Le montant ne peut pas avoir plus de 2 décimales".to_string(),
        ));
    }
    if principal > MAX_PRINCIPAL {
        return Err(ApiError::InvalidArgument(format!(
            "Le montant ne peut pas dépasser {MAX_PRINCIPAL}"
        )));
    }
    Ok(())
}

fn already_withdrawn() -> ApiError {
    ApiError::InvalidOperation("Ce compte a déjà été retiré".to_string())
}
