//! Errors returned by the GitHub ports.

use thiserror::Error;

/// Failure talking to the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitHubError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// GitHub answered with a status the operation does not accept.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be understood.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GitHubError {
    pub fn network(message: impl Into<String>) -> Self {
        GitHubError::Network(message.into())
    }

    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        GitHubError::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        GitHubError::InvalidResponse(message.into())
    }

    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
