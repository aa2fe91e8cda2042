use async_trait::async_trait;
use deposit_core_db::models::deposit_account::DepositAccountDetailsModel;
use deposit_core_db::repository::find_by_owner_id::FindByOwnerId;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{DepositAccountRepositoryImpl, SELECT_DETAILS};

impl DepositAccountRepositoryImpl {
    pub(super) async fn find_by_owner_id_impl(
        repo: &DepositAccountRepositoryImpl,
        owner_id: i64,
    ) -> Result<Vec<DepositAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("{SELECT_DETAILS} WHERE a.owner_id = $1 ORDER BY a.opened_at DESC, a.id DESC");
        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(&*repo.pool)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(DepositAccountDetailsModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl FindByOwnerId<Postgres, DepositAccountDetailsModel> for DepositAccountRepositoryImpl {
    async fn find_by_owner_id(
        &self,
        owner_id: i64,
    ) -> Result<Vec<DepositAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_owner_id_impl(self, owner_id).await
    }
}
