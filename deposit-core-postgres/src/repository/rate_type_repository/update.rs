use async_trait::async_trait;
use deposit_core_db::models::rate_type::RateTypeModel;
use deposit_core_db::repository::update::Update;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::RateTypeRepositoryImpl;

impl RateTypeRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &RateTypeRepositoryImpl,
        item: RateTypeModel,
    ) -> Result<Option<RateTypeModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            UPDATE rate_type
            SET name = $2, rate = $3
            WHERE id = $1
            RETURNING id, name, rate
            "#,
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.rate)
        .fetch_optional(&*repo.pool)
        .await?;

        row.as_ref().map(RateTypeModel::try_from_row).transpose()
    }
}

#[async_trait]
impl Update<Postgres, RateTypeModel> for RateTypeRepositoryImpl {
    async fn update(&self, item: RateTypeModel) -> Result<Option<RateTypeModel>, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
