//! Common types used across providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Supported git hosting backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Gitlab,
    Github,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Gitlab => "gitlab",
            ProviderType::Github => "github",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gitlab" => Ok(ProviderType::Gitlab),
            "github" => Ok(ProviderType::Github),
            _ => Err(Error::ProviderNotFound(s.to_string())),
        }
    }
}

/// Credentials used to talk to a provider.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Auth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Personal access token, sent as the bearer credential
    pub password: String,
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection and authentication settings for a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOptions {
    #[serde(rename = "type")]
    pub provider: ProviderType,
    /// Base URL of the instance; the provider default is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub auth: Auth,
}

impl ProviderOptions {
    pub fn new(provider: ProviderType, token: impl Into<String>) -> Self {
        Self {
            provider,
            host: None,
            auth: Auth {
                username: None,
                password: token.into(),
            },
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

/// What to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoOptions {
    /// User, group or organization that should own the repository
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub private: bool,
}

impl CreateRepoOptions {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            private: false,
        }
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}
