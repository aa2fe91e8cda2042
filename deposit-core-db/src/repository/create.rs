use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a new entity
///
/// The store assigns the identity, so the input is a "new" record without an id
/// and the output is the persisted record with every generated field populated.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `N` - The unsaved record type
/// * `T` - The persisted entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, NewRateTypeModel, RateTypeModel> for RateTypeRepositoryImpl {
///     async fn create(&self, item: NewRateTypeModel) -> Result<RateTypeModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, N: Send + 'static, T: Identifiable>: Send + Sync {
    /// Insert a single item
    ///
    /// # Returns
    /// * `Ok(T)` - The created entity with its identity
    /// * `Err` - An error if the statement could not be executed or violated a constraint
    async fn create(&self, item: N) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
