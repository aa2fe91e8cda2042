use async_trait::async_trait;
use deposit_core_db::models::rate_type::RateTypeModel;
use deposit_core_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::RateTypeRepositoryImpl;

impl RateTypeRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &RateTypeRepositoryImpl,
        id: i64,
    ) -> Result<Option<RateTypeModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(r#"SELECT id, name, rate FROM rate_type WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(RateTypeModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, RateTypeModel> for RateTypeRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<RateTypeModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id).await
    }
}
