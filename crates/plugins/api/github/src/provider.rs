//! Repository creation on GitHub.

use async_trait::async_trait;
use forgekit_core::{CreateRepoOptions, Error, Provider, ProviderOptions, Result};
use tracing::info;

use crate::client::GitHubClient;
use crate::types::CreateRepositoryRequest;
use crate::DEFAULT_GITHUB_URL;

/// GitHub implementation of [`Provider`].
///
/// Repositories land under the authenticated user when the owner is the
/// user's own login (compared case-insensitively), and under the
/// organization named by the owner otherwise.
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    pub fn new(opts: &ProviderOptions) -> Result<Self> {
        if opts.auth.password.is_empty() {
            return Err(Error::Config("GitHub access token is required".to_string()));
        }

        let host = opts.host.as_deref().unwrap_or(DEFAULT_GITHUB_URL);
        Ok(Self {
            client: GitHubClient::with_base_url(host, opts.auth.password.as_str())?,
        })
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    fn name(&self) -> &str {
        "github"
    }

    async fn create_repository(&self, opts: &CreateRepoOptions) -> Result<String> {
        let auth_user = self.client.current_user().await.map_err(|e| {
            if e.is_unauthorized() {
                Error::AuthenticationFailed(Box::new(e))
            } else {
                e
            }
        })?;

        let request = CreateRepositoryRequest {
            name: opts.name.clone(),
            private: opts.private,
        };

        // GitHub logins are case-insensitive
        let created = if auth_user.login.eq_ignore_ascii_case(&opts.owner) {
            self.client.create_user_repository(&request).await
        } else {
            self.client.create_org_repository(&opts.owner, &request).await
        };

        let repo = created.map_err(|e| {
            if e.is_not_found() {
                Error::OwnerNotFound {
                    owner: opts.owner.clone(),
                    source: Box::new(e),
                }
            } else {
                e
            }
        })?;

        if repo.html_url.is_empty() {
            return Err(Error::EmptyRepositoryUrl);
        }

        info!(url = %repo.html_url, "GitHub repository created");
        Ok(repo.html_url)
    }
}
