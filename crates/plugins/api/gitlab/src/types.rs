//! GitLab API response and request types.
//!
//! These types represent the raw JSON exchanged with GitLab REST API v4.

use serde::{Deserialize, Serialize};

// =============================================================================
// User
// =============================================================================

/// GitLab user representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitLabUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
}

// =============================================================================
// Project
// =============================================================================

/// Project visibility level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Internal,
    Public,
}

impl Visibility {
    /// Map a private/public flag to a visibility level.
    pub fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// GitLab project representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitLabProject {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub path_with_namespace: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// Absent for projects owned by a group
    #[serde(default)]
    pub owner: Option<GitLabUser>,
    /// Empty when the server omits it
    #[serde(default)]
    pub web_url: String,
}

// =============================================================================
// Request types
// =============================================================================

/// Request body for `POST /projects` and `POST /projects/user/:user_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility: Some(visibility),
        }
    }
}
