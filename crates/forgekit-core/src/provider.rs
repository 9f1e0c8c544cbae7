//! Provider trait for git hosting services.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CreateRepoOptions;

/// Trait for git hosting providers (GitLab, GitHub, etc.)
///
/// A provider holds its own credentials; callers only describe the
/// repository they want.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name (e.g., "gitlab", "github")
    fn name(&self) -> &str;

    /// Create a repository and return its web URL.
    ///
    /// The returned URL is never empty.
    async fn create_repository(&self, opts: &CreateRepoOptions) -> Result<String>;
}
