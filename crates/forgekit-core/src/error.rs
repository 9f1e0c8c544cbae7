//! Error types for forgekit.

use thiserror::Error;

/// Main error type for forgekit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(String),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The remote rejected the credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(#[source] Box<Error>),

    /// The requested owner (user, group or organization) does not exist
    #[error("Owner {owner} not found: {source}")]
    OwnerNotFound {
        owner: String,
        #[source]
        source: Box<Error>,
    },

    /// The remote created the repository but reported no web URL
    #[error("Repository URL is empty")]
    EmptyRepositoryUrl,

    /// Response could not be interpreted
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider not found
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Build an error from a non-success HTTP status and response body.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status reported by the remote, if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote answered with `401 Unauthorized`.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Whether the remote answered with `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for forgekit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(Error::from_status(401, "nope").status(), Some(401));
        assert_eq!(Error::Http("timeout".to_string()).status(), None);
        assert!(Error::from_status(401, "").is_unauthorized());
        assert!(Error::from_status(404, "").is_not_found());
        assert!(!Error::from_status(500, "").is_not_found());
    }

    #[test]
    fn test_owner_not_found_wraps_source() {
        let err = Error::OwnerNotFound {
            owner: "acme".to_string(),
            source: Box::new(Error::from_status(404, "404 Namespace Not Found")),
        };

        assert_eq!(
            err.to_string(),
            "Owner acme not found: API error: 404 - 404 Namespace Not Found"
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "API error: 404 - 404 Namespace Not Found");
    }

    #[test]
    fn test_authentication_failed_wraps_source() {
        let err = Error::AuthenticationFailed(Box::new(Error::from_status(401, "401 Unauthorized")));
        assert!(err.to_string().starts_with("Authentication failed"));
        assert!(err.source().is_some());
    }
}
