//! Remote data source for user records.
//!
//! The whole collection is fetched with a single GET. There is no
//! transport-level pagination and no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::SourceConfig;
use crate::users::record::UserRecord;

/// Errors that can occur while fetching user records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{endpoint}' responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Failed to decode users from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can produce the raw user list for the screen.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full collection. Called once per screen lifetime.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError>;
}

/// Connection and request timeouts for [`HttpUserSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for SourceTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(30),
        }
    }
}

impl From<&SourceConfig> for SourceTimeouts {
    fn from(config: &SourceConfig) -> Self {
        Self {
            connect: Duration::from_secs(config.connect_timeout_seconds as u64),
            request: Duration::from_secs(config.timeout_seconds as u64),
        }
    }
}

pub struct HttpUserSource {
    client: Client,
    endpoint: String,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>, timeouts: SourceTimeouts) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(|source| SourceError::Client { source })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        Self::new(config.endpoint.clone(), SourceTimeouts::from(config))
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching users");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let users: Vec<UserRecord> = response
            .json()
            .await
            .map_err(|source| SourceError::Decode {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        tracing::info!(count = users.len(), "Fetched users");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_follow_config() {
        let config = SourceConfig {
            endpoint: "http://127.0.0.1:1/users".to_string(),
            timeout_seconds: 12,
            connect_timeout_seconds: 3,
        };
        let timeouts = SourceTimeouts::from(&config);
        assert_eq!(timeouts.connect, Duration::from_secs(3));
        assert_eq!(timeouts.request, Duration::from_secs(12));
    }

    #[test]
    fn status_error_message_names_endpoint() {
        let err = SourceError::Status {
            endpoint: "http://example.test/users".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "'http://example.test/users' responded with HTTP 503"
        );
    }
}
