//! Repository creation on GitLab.

use async_trait::async_trait;
use forgekit_core::{CreateRepoOptions, Error, Provider, ProviderOptions, Result};
use tracing::{debug, info};

use crate::client::{GitLabApi, GitLabClient};
use crate::types::{CreateProjectRequest, GitLabProject, GitLabUser, Visibility};
use crate::DEFAULT_GITLAB_URL;

/// GitLab implementation of [`Provider`].
pub struct GitLabProvider<C = GitLabClient> {
    client: C,
}

impl GitLabProvider<GitLabClient> {
    /// Build a provider backed by the REST client.
    ///
    /// `opts.auth.password` is used as the access token.
    pub fn new(opts: &ProviderOptions) -> Result<Self> {
        if opts.auth.password.is_empty() {
            return Err(Error::Config("GitLab access token is required".to_string()));
        }

        let host = opts.host.as_deref().unwrap_or(DEFAULT_GITLAB_URL);
        Ok(Self::with_client(GitLabClient::with_base_url(
            host,
            opts.auth.password.as_str(),
        )))
    }
}

impl<C: GitLabApi> GitLabProvider<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }
}

/// Record the requested owner as the organization of a freshly created project.
fn assign_owner(project: &mut GitLabProject, owner: &str) {
    project
        .owner
        .get_or_insert_with(GitLabUser::default)
        .organization = Some(owner.to_string());
}

#[async_trait]
impl<C: GitLabApi> Provider for GitLabProvider<C> {
    fn name(&self) -> &str {
        "gitlab"
    }

    async fn create_repository(&self, opts: &CreateRepoOptions) -> Result<String> {
        let auth_user = self.client.current_user().await.map_err(|e| {
            if e.is_unauthorized() {
                Error::AuthenticationFailed(Box::new(e))
            } else {
                e
            }
        })?;

        let request = CreateProjectRequest::new(&opts.name, Visibility::from_private(opts.private));

        let mut project = self.client.create_project(&request).await.map_err(|e| {
            if e.is_not_found() {
                Error::OwnerNotFound {
                    owner: opts.owner.clone(),
                    source: Box::new(e),
                }
            } else {
                e
            }
        })?;

        if auth_user.username != opts.owner {
            debug!(
                user = %auth_user.username,
                owner = %opts.owner,
                "Assigning project to organization"
            );
            assign_owner(&mut project, &opts.owner);
        }

        if project.web_url.is_empty() {
            return Err(Error::EmptyRepositoryUrl);
        }

        info!(url = %project.web_url, "GitLab project created");
        Ok(project.web_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockGitLabApi;
    use forgekit_core::ProviderType;

    fn user(username: &str) -> GitLabUser {
        GitLabUser {
            id: 1,
            username: username.to_string(),
            ..Default::default()
        }
    }

    fn project(web_url: &str) -> GitLabProject {
        GitLabProject {
            id: 7,
            name: "widgets".to_string(),
            path_with_namespace: None,
            visibility: None,
            owner: None,
            web_url: web_url.to_string(),
        }
    }

    fn expect_user(mock: &mut MockGitLabApi, username: &'static str) {
        mock.expect_current_user()
            .times(1)
            .returning(move || Ok(user(username)));
    }

    #[tokio::test]
    async fn test_unauthorized_identity_lookup_is_authentication_failure() {
        let mut mock = MockGitLabApi::new();
        mock.expect_current_user()
            .returning(|| Err(Error::from_status(401, "401 Unauthorized")));
        mock.expect_create_project().never();

        let provider = GitLabProvider::with_client(mock);
        let err = provider
            .create_repository(&CreateRepoOptions::new("alice", "widgets"))
            .await
            .unwrap_err();

        match err {
            Error::AuthenticationFailed(source) => assert_eq!(source.status(), Some(401)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_identity_errors_pass_through() {
        let mut mock = MockGitLabApi::new();
        mock.expect_current_user()
            .returning(|| Err(Error::from_status(500, "boom")));
        mock.expect_create_project().never();

        let provider = GitLabProvider::with_client(mock);
        let err = provider
            .create_repository(&CreateRepoOptions::new("alice", "widgets"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_not_found_on_create_is_owner_not_found() {
        let mut mock = MockGitLabApi::new();
        expect_user(&mut mock, "alice");
        mock.expect_create_project()
            .returning(|_| Err(Error::from_status(404, "404 Namespace Not Found")));

        let provider = GitLabProvider::with_client(mock);
        let err = provider
            .create_repository(&CreateRepoOptions::new("acme", "widgets"))
            .await
            .unwrap_err();

        match err {
            Error::OwnerNotFound { owner, source } => {
                assert_eq!(owner, "acme");
                assert_eq!(source.status(), Some(404));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_create_errors_pass_through() {
        let mut mock = MockGitLabApi::new();
        expect_user(&mut mock, "alice");
        mock.expect_create_project()
            .returning(|_| Err(Error::from_status(400, "name has already been taken")));

        let provider = GitLabProvider::with_client(mock);
        let err = provider
            .create_repository(&CreateRepoOptions::new("acme", "widgets"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_successful_creation_returns_url() {
        let mut mock = MockGitLabApi::new();
        expect_user(&mut mock, "alice");
        mock.expect_create_project()
            .withf(|req| req.name == "widgets" && req.visibility == Some(Visibility::Public))
            .times(1)
            .returning(|_| Ok(project("https://gitlab.com/alice/widgets")));

        let provider = GitLabProvider::with_client(mock);
        let url = provider
            .create_repository(&CreateRepoOptions::new("alice", "widgets"))
            .await
            .unwrap();

        assert_eq!(url, "https://gitlab.com/alice/widgets");
    }

    #[tokio::test]
    async fn test_private_flag_requests_private_visibility() {
        let mut mock = MockGitLabApi::new();
        expect_user(&mut mock, "alice");
        mock.expect_create_project()
            .withf(|req| req.visibility == Some(Visibility::Private))
            .times(1)
            .returning(|_| Ok(project("https://gitlab.com/acme/widgets")));

        let provider = GitLabProvider::with_client(mock);
        let url = provider
            .create_repository(&CreateRepoOptions::new("acme", "widgets").private(true))
            .await
            .unwrap();

        assert_eq!(url, "https://gitlab.com/acme/widgets");
    }

    #[tokio::test]
    async fn test_empty_url_is_an_error() {
        let mut mock = MockGitLabApi::new();
        expect_user(&mut mock, "alice");
        mock.expect_create_project().returning(|_| Ok(project("")));

        let provider = GitLabProvider::with_client(mock);
        let err = provider
            .create_repository(&CreateRepoOptions::new("alice", "widgets"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::EmptyRepositoryUrl));
    }

    #[test]
    fn test_assign_owner_without_owner_record() {
        let mut p = project("https://gitlab.com/acme/widgets");
        assign_owner(&mut p, "acme");
        assert_eq!(p.owner.unwrap().organization.as_deref(), Some("acme"));
    }

    #[test]
    fn test_new_requires_token() {
        let opts = ProviderOptions::new(ProviderType::Gitlab, "");
        assert!(matches!(GitLabProvider::new(&opts), Err(Error::Config(_))));

        let opts = ProviderOptions::new(ProviderType::Gitlab, "glpat-test");
        let provider = GitLabProvider::new(&opts).unwrap();
        assert_eq!(provider.name(), "gitlab");
    }

    mod integration {
        use super::*;
        use httpmock::prelude::*;

        fn create_provider(server: &MockServer) -> GitLabProvider {
            let opts =
                ProviderOptions::new(ProviderType::Gitlab, "glpat-test").with_host(server.base_url());
            GitLabProvider::new(&opts).unwrap()
        }

        #[tokio::test]
        async fn test_create_repository_end_to_end() {
            let server = MockServer::start();

            let user_mock = server.mock(|when, then| {
                when.method(GET)
                    .path("/api/v4/user")
                    .header("PRIVATE-TOKEN", "glpat-test");
                then.status(200)
                    .json_body(serde_json::json!({"id": 1, "username": "alice"}));
            });
            let create_mock = server.mock(|when, then| {
                when.method(POST)
                    .path("/api/v4/projects")
                    .body_includes("\"name\":\"widgets\"");
                then.status(201).json_body(serde_json::json!({
                    "id": 7,
                    "name": "widgets",
                    "web_url": format!("{}/alice/widgets", server.base_url())
                }));
            });

            let url = create_provider(&server)
                .create_repository(&CreateRepoOptions::new("alice", "widgets"))
                .await
                .unwrap();

            user_mock.assert();
            create_mock.assert();
            assert_eq!(url, format!("{}/alice/widgets", server.base_url()));
        }

        #[tokio::test]
        async fn test_bad_token_end_to_end() {
            let server = MockServer::start();

            server.mock(|when, then| {
                when.method(GET).path("/api/v4/user");
                then.status(401)
                    .json_body(serde_json::json!({"message": "401 Unauthorized"}));
            });
            let create_mock = server.mock(|when, then| {
                when.method(POST).path("/api/v4/projects");
                then.status(201);
            });

            let err = create_provider(&server)
                .create_repository(&CreateRepoOptions::new("alice", "widgets"))
                .await
                .unwrap_err();

            assert!(matches!(err, Error::AuthenticationFailed(_)));
            assert_eq!(create_mock.hits(), 0);
        }
    }
}
