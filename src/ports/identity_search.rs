//! Identity search port.
//!
//! Resolves a Gumroad buyer to a GitHub account by email.

use async_trait::async_trait;

use super::github_error::GitHubError;
use crate::domain::access::GitHubLogin;

/// Port for finding a GitHub user by profile email.
#[async_trait]
pub trait IdentitySearch: Send + Sync {
    /// Find the login whose public profile email equals `email` exactly.
    ///
    /// Returns `Ok(None)` when no account matches. When several accounts
    /// match, the first one in search order wins.
    async fn find_login_by_email(&self, email: &str) -> Result<Option<GitHubLogin>, GitHubError>;
}
