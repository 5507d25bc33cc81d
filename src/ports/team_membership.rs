//! Team membership port.
//!
//! Adds and removes users from the GitHub team that gates access.

use async_trait::async_trait;

use super::github_error::GitHubError;
use crate::domain::access::GitHubLogin;

/// Port for mutating membership of the access team.
///
/// Calls are not idempotent from the caller's point of view: removing a
/// user that is no longer a member reports an error.
#[async_trait]
pub trait TeamMembership: Send + Sync {
    /// Add (or invite) the user to the team. Any 2xx status is success.
    async fn add_member(&self, login: &GitHubLogin) -> Result<(), GitHubError>;

    /// Remove the user from the team. Only `204 No Content` is success.
    async fn remove_member(&self, login: &GitHubLogin) -> Result<(), GitHubError>;
}
