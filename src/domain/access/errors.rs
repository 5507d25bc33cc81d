//! Access error types.
//!
//! Every variant is non-fatal: the HTTP layer logs it and still answers
//! `200 OK` so Gumroad does not retry the ping.
//!
//! | Error | Family | Log level |
//! |-------|--------|-----------|
//! | UnverifiedSeller | rejection | warn |
//! | MalformedPayload | rejection | warn |
//! | UserNotFound | lookup | error |
//! | SearchFailed | collaborator | error |
//! | GrantFailed | collaborator | error |
//! | RevokeFailed | collaborator | error |

use thiserror::Error;

use super::login::GitHubLogin;

/// Reasons a Gumroad ping could not be turned into a team change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// `seller_id` was empty or did not match the configured seller.
    #[error("Seller id does not match the configured seller")]
    UnverifiedSeller,

    /// Body could not be decoded or misses a required field.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// No GitHub account lists the buyer's email.
    #[error("GitHub user for email \"{email}\" could not be found")]
    UserNotFound { email: String },

    /// The user search call failed.
    #[error("Could not search GitHub users for email \"{email}\": {reason}")]
    SearchFailed { email: String, reason: String },

    /// The add-to-team call failed.
    #[error("Could not add GitHub user \"{login}\" to team due to: {reason}")]
    GrantFailed { login: String, reason: String },

    /// The remove-from-team call failed.
    #[error("Could not remove GitHub user \"{login}\" from team: {reason}")]
    RevokeFailed { login: String, reason: String },
}

impl AccessError {
    pub fn malformed(message: impl Into<String>) -> Self {
        AccessError::MalformedPayload(message.into())
    }

    pub fn user_not_found(email: impl Into<String>) -> Self {
        AccessError::UserNotFound {
            email: email.into(),
        }
    }

    pub fn search_failed(email: impl Into<String>, reason: impl ToString) -> Self {
        AccessError::SearchFailed {
            email: email.into(),
            reason: reason.to_string(),
        }
    }

    pub fn grant_failed(login: &GitHubLogin, reason: impl ToString) -> Self {
        AccessError::GrantFailed {
            login: login.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn revoke_failed(login: &GitHubLogin, reason: impl ToString) -> Self {
        AccessError::RevokeFailed {
            login: login.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Stable label used as the `outcome` field in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessError::UnverifiedSeller => "unverified_seller",
            AccessError::MalformedPayload(_) => "malformed_payload",
            AccessError::UserNotFound { .. } => "user_not_found",
            AccessError::SearchFailed { .. } => "search_failed",
            AccessError::GrantFailed { .. } => "grant_failed",
            AccessError::RevokeFailed { .. } => "revoke_failed",
        }
    }

    /// True when the ping itself was rejected before any GitHub call.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AccessError::UnverifiedSeller | AccessError::MalformedPayload(_)
        )
    }
}
