use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::Database;

/// Repository trait for the single open → withdrawn transition of an account
///
/// Implementations must perform the transition as one conditional statement
/// that only matches rows that are still open, so that concurrent callers
/// cannot both succeed.
///
/// # Example
/// ```ignore
/// UPDATE deposit_account SET withdrawn = TRUE, withdrawn_at = $2
/// WHERE id = $1 AND withdrawn = FALSE
/// RETURNING ...
/// ```
#[async_trait]
pub trait MarkWithdrawn<DB: Database, T>: Send + Sync {
    /// Flip the account identified by `id` to withdrawn at `withdrawn_at`
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The account after the transition
    /// * `Ok(None)` - The account does not exist or was already withdrawn
    /// * `Err` - An error if the statement could not be executed
    async fn mark_withdrawn(
        &self,
        id: i64,
        withdrawn_at: NaiveDateTime,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
