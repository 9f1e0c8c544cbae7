//! Provider selection.

use forgekit_core::{Provider, ProviderOptions, ProviderType, Result};
use forgekit_github::GitHubProvider;
use forgekit_gitlab::GitLabProvider;

/// Build the backend named by `opts.provider`.
pub fn build_provider(opts: &ProviderOptions) -> Result<Box<dyn Provider>> {
    match opts.provider {
        ProviderType::Gitlab => Ok(Box::new(GitLabProvider::new(opts)?)),
        ProviderType::Github => Ok(Box::new(GitHubProvider::new(opts)?)),
    }
}
