//! HTTP client for the external user directory.

use std::time::Duration;

use async_trait::async_trait;
use deposit_core_api::service::user_directory::UserDirectory;
use reqwest::StatusCode;

/// Queries `GET {base_url}/users/{id}` with a per-request timeout.
///
/// Every failure path answers "absent": only a 2xx proves a user exists.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, timeout)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn user_url(&self, user_id: i64) -> String {
        format!("{}/users/{user_id}", self.base_url)
    }

    async fn get_user(&self, user_id: i64) -> Option<reqwest::Response> {
        let response = self
            .client
            .get(self.user_url(user_id))
            .timeout(self.timeout)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => Some(response),
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                tracing::debug!(user_id, "user not found in directory");
                None
            }
            Ok(response) => {
                tracing::warn!(user_id, status = %response.status(), "user directory answered with an error status");
                None
            }
            Err(error) if error.is_timeout() => {
                tracing::warn!(user_id, timeout_ms = self.timeout.as_millis() as u64, "user directory timed out");
                None
            }
            Err(error) => {
                tracing::warn!(user_id, %error, "user directory unreachable");
                None
            }
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn exists(&self, user_id: i64) -> bool {
        self.get_user(user_id).await.is_some()
    }

    async fn fetch(&self, user_id: i64) -> Option<serde_json::Value> {
        let response = self.get_user(user_id).await?;
        match response.json::<serde_json::Value>().await {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(user_id, %error, "user directory returned an undecodable body");
                None
            }
        }
    }
}
