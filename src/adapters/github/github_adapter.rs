//! GitHub REST adapter.
//!
//! Implements `IdentitySearch` and `TeamMembership` against the GitHub API.
//!
//! # Endpoints
//!
//! - `GET {api_base_url}/search/users?q={email}` with the text-match media type
//! - `PUT {team_membership_url}/{login}` to add a member
//! - `DELETE {team_membership_url}/{login}` to remove a member
//!
//! # Configuration
//!
//! ```ignore
//! let config = GitHubConfig::new(token, "https://api.github.com/orgs/acme/teams/buyers/memberships");
//! let adapter = GitHubAdapter::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_LENGTH};
use reqwest::StatusCode;
use secrecy::ExposeSecret;

use crate::config::GitHubConfig;
use crate::domain::access::GitHubLogin;
use crate::ports::{GitHubError, IdentitySearch, TeamMembership};

use super::api_types::{SearchUsersResponse, TEXT_MATCH_MEDIA_TYPE};

/// GitHub rejects API calls without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// GitHub adapter backed by a shared `reqwest::Client`.
pub struct GitHubAdapter {
    config: GitHubConfig,
    http_client: reqwest::Client,
}

impl GitHubAdapter {
    /// Create a new adapter with the given configuration.
    pub fn new(config: GitHubConfig) -> Result<Self, GitHubError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitHubError::network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn member_url(&self, login: &GitHubLogin) -> String {
        format!(
            "{}/{}",
            self.config.team_membership_url.trim_end_matches('/'),
            login
        )
    }

    fn search_url(&self) -> String {
        format!(
            "{}/search/users",
            self.config.api_base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl IdentitySearch for GitHubAdapter {
    async fn find_login_by_email(&self, email: &str) -> Result<Option<GitHubLogin>, GitHubError> {
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("q", email)])
            .header(ACCEPT, TEXT_MATCH_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| GitHubError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "GitHub user search failed");
            return Err(GitHubError::unexpected_status(status.as_u16(), body));
        }

        let results: SearchUsersResponse = response.json().await.map_err(|e| {
            GitHubError::invalid_response(format!("Failed to parse search response: {}", e))
        })?;

        tracing::debug!(
            total_count = results.total_count,
            items = results.items.len(),
            "GitHub user search returned"
        );

        results
            .login_for_email(email)
            .map(GitHubLogin::new)
            .transpose()
            .map_err(|e| GitHubError::invalid_response(e.to_string()))
    }
}

#[async_trait]
impl TeamMembership for GitHubAdapter {
    async fn add_member(&self, login: &GitHubLogin) -> Result<(), GitHubError> {
        let response = self
            .http_client
            .put(self.member_url(login))
            .bearer_auth(self.config.token.expose_secret())
            .header(ACCEPT, GITHUB_JSON_MEDIA_TYPE)
            .header(CONTENT_LENGTH, 0)
            .send()
            .await
            .map_err(|e| GitHubError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::unexpected_status(status.as_u16(), body));
        }

        Ok(())
    }

    async fn remove_member(&self, login: &GitHubLogin) -> Result<(), GitHubError> {
        let response = self
            .http_client
            .delete(self.member_url(login))
            .bearer_auth(self.config.token.expose_secret())
            .header(ACCEPT, GITHUB_JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| GitHubError::network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::unexpected_status(status.as_u16(), body));
        }

        Ok(())
    }
}
