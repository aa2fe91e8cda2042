use async_trait::async_trait;
use deposit_core_db::models::deposit_account::DepositAccountDetailsModel;
use deposit_core_db::repository::find_all::FindAll;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{DepositAccountRepositoryImpl, SELECT_DETAILS};

impl DepositAccountRepositoryImpl {
    pub(super) async fn find_all_impl(
        repo: &DepositAccountRepositoryImpl,
    ) -> Result<Vec<DepositAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("{SELECT_DETAILS} ORDER BY a.opened_at DESC, a.id DESC");
        let rows = sqlx::query(&query).fetch_all(&*repo.pool).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(DepositAccountDetailsModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl FindAll<Postgres, DepositAccountDetailsModel> for DepositAccountRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<DepositAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        Self::find_all_impl(self).await
    }
}
