use async_trait::async_trait;
use chrono::NaiveDateTime;
use deposit_core_db::models::deposit_account::DepositAccountModel;
use deposit_core_db::repository::mark_withdrawn::MarkWithdrawn;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::DepositAccountRepositoryImpl;

impl DepositAccountRepositoryImpl {
    /// Flips the row only while it is still open; a row that another caller
    /// already withdrew matches nothing and yields `None`.
    pub(super) async fn mark_withdrawn_impl(
        repo: &DepositAccountRepositoryImpl,
        id: i64,
        withdrawn_at: NaiveDateTime,
    ) -> Result<Option<DepositAccountModel>, Box<dyn Error + Send + Sync>> {
        let updated = sqlx::query_as::<_, DepositAccountModel>(
            r#"
            UPDATE deposit_account
            SET withdrawn = TRUE, withdrawn_at = $2
            WHERE id = $1 AND withdrawn = FALSE
            RETURNING id, rate_type_id, owner_id, opened_at, matures_at, principal, withdrawn, withdrawn_at
            "#,
        )
        .bind(id)
        .bind(withdrawn_at)
        .fetch_optional(&*repo.pool)
        .await?;

        if updated.is_none() {
            tracing::debug!(account_id = id, "withdrawal matched no open account");
        }

        Ok(updated)
    }
}

#[async_trait]
impl MarkWithdrawn<Postgres, DepositAccountModel> for DepositAccountRepositoryImpl {
    async fn mark_withdrawn(
        &self,
        id: i64,
        withdrawn_at: NaiveDateTime,
    ) -> Result<Option<DepositAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::mark_withdrawn_impl(self, id, withdrawn_at).await
    }
}
