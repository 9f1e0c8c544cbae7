//! GitLab provider implementation for forgekit.
//!
//! [`GitLabClient`] talks to the GitLab REST API v4; [`GitLabProvider`]
//! builds the repository-creation flow on top of any [`GitLabApi`].

mod client;
mod provider;
mod types;

pub use client::{GitLabApi, GitLabClient};
pub use provider::GitLabProvider;
pub use types::*;

/// Default GitLab API URL.
pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";
