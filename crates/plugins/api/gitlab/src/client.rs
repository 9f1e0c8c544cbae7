//! GitLab API client implementation.

use async_trait::async_trait;
use forgekit_core::{Error, Result};
use tracing::{debug, warn};

use crate::types::{CreateProjectRequest, GitLabProject, GitLabUser};
use crate::DEFAULT_GITLAB_URL;

/// The slice of the GitLab API the provider depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitLabApi: Send + Sync {
    /// `GET /user`
    async fn current_user(&self) -> Result<GitLabUser>;

    /// `POST /projects`
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<GitLabProject>;

    /// `POST /projects/user/:user_id` (admin only)
    async fn create_project_for_user(
        &self,
        user_id: u64,
        request: &CreateProjectRequest,
    ) -> Result<GitLabProject>;
}

/// GitLab API client.
pub struct GitLabClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl GitLabClient {
    /// Create a new client for gitlab.com.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_GITLAB_URL, token)
    }

    /// Create a new GitLab client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build request with common headers.
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("PRIVATE-TOKEN", &self.token)
    }

    /// Get the API URL for a given endpoint.
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/v4{}", self.base_url, endpoint)
    }

    /// Make an authenticated GET request with typed deserialization.
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = url, "GitLab GET request");

        let response = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST request.
    async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        debug!(url = url, "GitLab POST request");

        let response = self
            .request(reqwest::Method::POST, url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle response and map errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status_code,
                message = message,
                "GitLab API error response"
            );
            return Err(Error::from_status(status_code, message));
        }

        response
            .json()
            .await
            .map_err(|e| Error::InvalidData(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl GitLabApi for GitLabClient {
    async fn current_user(&self) -> Result<GitLabUser> {
        let url = self.api_url("/user");
        self.get(&url).await
    }

    async fn create_project(&self, request: &CreateProjectRequest) -> Result<GitLabProject> {
        let url = self.api_url("/projects");
        self.post(&url, request).await
    }

    async fn create_project_for_user(
        &self,
        user_id: u64,
        request: &CreateProjectRequest,
    ) -> Result<GitLabProject> {
        let url = self.api_url(&format!("/projects/user/{}", user_id));
        self.post(&url, request).await
    }
}
