//! GitHub API client implementation.

use forgekit_core::{Error, Result};
use tracing::{debug, warn};

use crate::types::{CreateRepositoryRequest, GitHubRepository, GitHubUser};
use crate::DEFAULT_GITHUB_URL;

/// GitHub API client.
pub struct GitHubClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a new client for api.github.com.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_GITHUB_URL, token)
    }

    /// Create a new GitHub client with a custom base URL (GitHub Enterprise).
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("forgekit")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    fn request(&self, method: reqwest::Method, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(method = %method, url = %url, "GitHub request");

        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status = status, message = message, "GitHub API error response");
            return Err(Error::from_status(status, message));
        }

        response
            .json()
            .await
            .map_err(|e| Error::InvalidData(format!("Failed to parse response: {}", e)))
    }

    /// `GET /user`
    pub async fn current_user(&self) -> Result<GitHubUser> {
        self.send(self.request(reqwest::Method::GET, "/user")).await
    }

    /// `POST /user/repos`
    pub async fn create_user_repository(
        &self,
        request: &CreateRepositoryRequest,
    ) -> Result<GitHubRepository> {
        self.send(self.request(reqwest::Method::POST, "/user/repos").json(request))
            .await
    }

    /// `POST /orgs/{org}/repos`
    pub async fn create_org_repository(
        &self,
        org: &str,
        request: &CreateRepositoryRequest,
    ) -> Result<GitHubRepository> {
        let endpoint = format!("/orgs/{}/repos", org);
        self.send(self.request(reqwest::Method::POST, &endpoint).json(request))
            .await
    }
}
