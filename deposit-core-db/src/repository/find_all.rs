use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for listing every entity of a kind
///
/// The ordering is part of each implementation's contract and is documented there.
#[async_trait]
pub trait FindAll<DB: Database, T>: Send + Sync {
    /// Load all entities
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Every stored entity, possibly empty
    /// * `Err` - An error if the query could not be executed
    async fn find_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
