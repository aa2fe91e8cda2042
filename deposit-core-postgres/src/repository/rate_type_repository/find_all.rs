use async_trait::async_trait;
use deposit_core_db::models::rate_type::RateTypeModel;
use deposit_core_db::repository::find_all::FindAll;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::RateTypeRepositoryImpl;

impl RateTypeRepositoryImpl {
    pub(super) async fn find_all_impl(
        repo: &RateTypeRepositoryImpl,
    ) -> Result<Vec<RateTypeModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT id, name, rate FROM rate_type ORDER BY id"#)
            .fetch_all(&*repo.pool)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(RateTypeModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl FindAll<Postgres, RateTypeModel> for RateTypeRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<RateTypeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_all_impl(self).await
    }
}
