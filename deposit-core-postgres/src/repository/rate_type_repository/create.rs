use async_trait::async_trait;
use deposit_core_db::models::rate_type::{NewRateTypeModel, RateTypeModel};
use deposit_core_db::repository::create::Create;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::RateTypeRepositoryImpl;

impl RateTypeRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &RateTypeRepositoryImpl,
        item: NewRateTypeModel,
    ) -> Result<RateTypeModel, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            INSERT INTO rate_type (name, rate)
            VALUES ($1, $2)
            RETURNING id, name, rate
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.rate)
        .fetch_one(&*repo.pool)
        .await?;

        RateTypeModel::try_from_row(&row)
    }
}

#[async_trait]
impl Create<Postgres, NewRateTypeModel, RateTypeModel> for RateTypeRepositoryImpl {
    async fn create(&self, item: NewRateTypeModel) -> Result<RateTypeModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
