use async_trait::async_trait;
use deposit_core_db::repository::delete::Delete;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::RateTypeRepositoryImpl;

impl RateTypeRepositoryImpl {
    /// Deleting a rate type removes its deposit accounts through the foreign key cascade.
    pub(super) async fn delete_impl(
        repo: &RateTypeRepositoryImpl,
        id: i64,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let rows_affected = sqlx::query(r#"DELETE FROM rate_type WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

#[async_trait]
impl Delete<Postgres> for RateTypeRepositoryImpl {
    async fn delete(&self, id: i64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::delete_impl(self, id).await
    }
}
