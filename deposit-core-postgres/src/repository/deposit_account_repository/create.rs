use async_trait::async_trait;
use deposit_core_db::models::deposit_account::{DepositAccountModel, NewDepositAccountModel};
use deposit_core_db::repository::create::Create;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DepositAccountRepositoryImpl;

impl DepositAccountRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &DepositAccountRepositoryImpl,
        item: NewDepositAccountModel,
    ) -> Result<DepositAccountModel, Box<dyn Error + Send + Sync>> {
        let saved = sqlx::query_as::<_, DepositAccountModel>(
            r#"
            INSERT INTO deposit_account (rate_type_id, owner_id, opened_at, matures_at, principal, withdrawn, withdrawn_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, NULL)
            RETURNING id, rate_type_id, owner_id, opened_at, matures_at, principal, withdrawn, withdrawn_at
            "#,
        )
        .bind(item.rate_type_id)
        .bind(item.owner_id)
        .bind(item.opened_at)
        .bind(item.matures_at)
        .bind(item.principal)
        .fetch_one(&*repo.pool)
        .await?;

        Ok(saved)
    }
}

#[async_trait]
impl Create<Postgres, NewDepositAccountModel, DepositAccountModel> for DepositAccountRepositoryImpl {
    async fn create(
        &self,
        item: NewDepositAccountModel,
    ) -> Result<DepositAccountModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
