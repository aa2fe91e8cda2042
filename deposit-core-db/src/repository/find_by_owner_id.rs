use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for finding the entities belonging to an external owner
///
/// The owner id is opaque to the store; no referential check is performed.
#[async_trait]
pub trait FindByOwnerId<DB: Database, T>: Send + Sync {
    /// Find all entities owned by `owner_id`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The owner's entities, empty when the owner has none
    /// * `Err` - An error if the query could not be executed
    async fn find_by_owner_id(
        &self,
        owner_id: i64,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
