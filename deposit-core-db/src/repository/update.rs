use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for overwriting an existing entity
///
/// The entity is matched by `Identifiable::get_id`. Every other column is replaced.
#[async_trait]
pub trait Update<DB: Database, T: Identifiable + Send + 'static>: Send + Sync {
    /// Update a single item
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The entity as stored after the update
    /// * `Ok(None)` - If no entity with that id exists
    /// * `Err` - An error if the statement could not be executed
    async fn update(&self, item: T) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
