use async_trait::async_trait;

/// Read-only view of the external user directory.
///
/// Implementations never fail: a timeout, a transport error or an unexpected
/// status is reported as an absent user, so callers treat "cannot confirm" the
/// same as "does not exist".
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether the directory knows `user_id`.
    async fn exists(&self, user_id: i64) -> bool;

    /// The directory's JSON record for `user_id`, if it can be fetched and decoded.
    async fn fetch(&self, user_id: i64) -> Option<serde_json::Value>;
}
