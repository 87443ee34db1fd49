//! Data-access collaborator.
//!
//! Every dashboard number, course list, task board, notification and forum
//! thread comes from a [`DataSource`]. The production implementation talks to
//! the backend at `api_base_url`; tests supply in-memory fakes.

mod http;

use async_trait::async_trait;
use url::Url;

pub use http::HttpClient;

use crate::config::{Config, ConfigError};
use crate::model::{
    Course, DashboardSummary, ForumPost, ForumThread, Notification, Role, Task,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("invalid resource path {0:?}")]
    InvalidPath(String),
    #[error("no data source is available in this build")]
    Unavailable,
}

impl DataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::Status { status: 404, .. })
    }
}

/// Fetch-by-role and fetch-by-id access to backend records
#[async_trait(?Send)]
pub trait DataSource {
    async fn dashboard(&self, role: Role) -> Result<DashboardSummary, DataError>;
    async fn courses(&self, role: Role) -> Result<Vec<Course>, DataError>;
    async fn course(&self, id: &str) -> Result<Course, DataError>;
    async fn tasks(&self, role: Role) -> Result<Vec<Task>, DataError>;
    async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, DataError>;
    async fn threads(&self) -> Result<Vec<ForumThread>, DataError>;
    async fn thread(&self, id: &str) -> Result<ForumThread, DataError>;
    async fn thread_posts(&self, thread_id: &str) -> Result<Vec<ForumPost>, DataError>;
}

/// [`DataSource`] backed by the REST backend
#[derive(Clone, Debug)]
pub struct HttpDataSource {
    base: Url,
    client: HttpClient,
}

impl HttpDataSource {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: HttpClient::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.api_base()?))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Join percent-encoded segments onto the base URL
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DataError> {
        let relative = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        self.base
            .join(&relative)
            .map_err(|_| DataError::InvalidPath(relative))
    }

    async fn get<T: for<'de> serde::Deserialize<'de>>(
        &self,
        segments: &[&str],
    ) -> Result<T, DataError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);
        let result = self.client.get_json(&url).await;
        if let Err(e) = &result {
            tracing::warn!("Data request failed: {}", e);
        }
        result
    }
}

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn dashboard(&self, role: Role) -> Result<DashboardSummary, DataError> {
        self.get(&["roles", role.as_str(), "dashboard"]).await
    }

    async fn courses(&self, role: Role) -> Result<Vec<Course>, DataError> {
        self.get(&["roles", role.as_str(), "courses"]).await
    }

    async fn course(&self, id: &str) -> Result<Course, DataError> {
        self.get(&["courses", id]).await
    }

    async fn tasks(&self, role: Role) -> Result<Vec<Task>, DataError> {
        self.get(&["roles", role.as_str(), "tasks"]).await
    }

    async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, DataError> {
        self.get(&["users", user_id, "notifications"]).await
    }

    async fn threads(&self) -> Result<Vec<ForumThread>, DataError> {
        self.get(&["forum", "threads"]).await
    }

    async fn thread(&self, id: &str) -> Result<ForumThread, DataError> {
        self.get(&["forum", "threads", id]).await
    }

    async fn thread_posts(&self, thread_id: &str) -> Result<Vec<ForumPost>, DataError> {
        self.get(&["forum", "threads", thread_id, "posts"]).await
    }
}

/// Source used when no backend is configured; every fetch is unavailable
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineDataSource;

#[async_trait(?Send)]
impl DataSource for OfflineDataSource {
    async fn dashboard(&self, _role: Role) -> Result<DashboardSummary, DataError> {
        Err(DataError::Unavailable)
    }

    async fn courses(&self, _role: Role) -> Result<Vec<Course>, DataError> {
        Err(DataError::Unavailable)
    }

    async fn course(&self, _id: &str) -> Result<Course, DataError> {
        Err(DataError::Unavailable)
    }

    async fn tasks(&self, _role: Role) -> Result<Vec<Task>, DataError> {
        Err(DataError::Unavailable)
    }

    async fn notifications(&self, _user_id: &str) -> Result<Vec<Notification>, DataError> {
        Err(DataError::Unavailable)
    }

    async fn threads(&self) -> Result<Vec<ForumThread>, DataError> {
        Err(DataError::Unavailable)
    }

    async fn thread(&self, _id: &str) -> Result<ForumThread, DataError> {
        Err(DataError::Unavailable)
    }

    async fn thread_posts(&self, _thread_id: &str) -> Result<Vec<ForumPost>, DataError> {
        Err(DataError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpDataSource {
        HttpDataSource::from_config(&Config {
            api_base_url: base.into(),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let data = source("https://portal.uni.edu/api/v1");
        assert_eq!(
            data.endpoint(&["roles", "leader", "dashboard"]).unwrap().as_str(),
            "https://portal.uni.edu/api/v1/roles/leader/dashboard"
        );
    }

    #[test]
    fn ids_are_percent_encoded() {
        let data = source("https://portal.uni.edu/api/");
        assert_eq!(
            data.endpoint(&["courses", "../admin"]).unwrap().as_str(),
            "https://portal.uni.edu/api/courses/..%2Fadmin"
        );
        assert_eq!(
            data.endpoint(&["forum", "threads", "a b"]).unwrap().as_str(),
            "https://portal.uni.edu/api/forum/threads/a%20b"
        );
    }

    #[test]
    fn not_found_detection() {
        let err = DataError::Status {
            url: "x".into(),
            status: 404,
        };
        assert!(err.is_not_found());
        assert!(!DataError::Unavailable.is_not_found());
    }
}
