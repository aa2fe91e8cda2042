use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for deleting an entity by its identity
#[async_trait]
pub trait Delete<DB: Database>: Send + Sync {
    /// Delete the entity with `id`
    ///
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No entity with that id exists
    /// * `Err` - An error if the statement could not be executed
    async fn delete(&self, id: i64) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
