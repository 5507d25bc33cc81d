//! GitHub configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    /// Token allowed to manage the access team
    pub token: SecretString,

    /// Base URL for the REST API (user search lives under it)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Team memberships collection, e.g.
    /// `https://api.github.com/orgs/{org}/teams/{team}/memberships`
    #[serde(default)]
    pub team_membership_url: String,
}

impl GitHubConfig {
    pub fn new(token: impl Into<String>, team_membership_url: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            api_base_url: default_api_base_url(),
            team_membership_url: team_membership_url.into(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Validate GitHub configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("GITHUB__TOKEN"));
        }
        if self.team_membership_url.is_empty() {
            return Err(ValidationError::MissingRequired("GITHUB__TEAM_MEMBERSHIP_URL"));
        }

        check_url("GITHUB__API_BASE_URL", &self.api_base_url, environment)?;
        check_url(
            "GITHUB__TEAM_MEMBERSHIP_URL",
            &self.team_membership_url,
            environment,
        )?;

        Ok(())
    }
}

fn check_url(
    name: &'static str,
    url: &str,
    environment: &Environment,
) -> Result<(), ValidationError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidUrl(name));
    }
    if *environment == Environment::Production && !url.starts_with("https://") {
        return Err(ValidationError::UrlMustBeHttps(name));
    }
    Ok(())
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}
