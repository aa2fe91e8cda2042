use async_trait::async_trait;
use deposit_core_db::models::deposit_account::DepositAccountDetailsModel;
use deposit_core_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{DepositAccountRepositoryImpl, SELECT_DETAILS};

impl DepositAccountRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &DepositAccountRepositoryImpl,
        id: i64,
    ) -> Result<Option<DepositAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("{SELECT_DETAILS} WHERE a.id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(DepositAccountDetailsModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, DepositAccountDetailsModel> for DepositAccountRepositoryImpl {
    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<DepositAccountDetailsModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
