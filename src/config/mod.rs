//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GUMROAD_GITHUB_ACCESS` prefix and nested values use double underscores as
//! separators. A bare `PORT` variable overrides `server.port`, which is how most
//! hosting platforms hand out the listen port.
//!
//! # Example
//!
//! ```no_run
//! use gumroad_github_access::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod github;
mod gumroad;
mod server;

pub use error::{ConfigError, ValidationError};
pub use github::GitHubConfig;
pub use gumroad::GumroadConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "GUMROAD_GITHUB_ACCESS";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// GitHub API access (token, URLs)
    pub github: GitHubConfig,

    /// Gumroad ping verification
    pub gumroad: GumroadConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GUMROAD_GITHUB_ACCESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies `PORT` on top of `server.port` when set
    ///
    /// # Environment Variable Format
    ///
    /// - `GUMROAD_GITHUB_ACCESS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GUMROAD_GITHUB_ACCESS__GITHUB__TOKEN=...` -> `github.token = ...`
    /// - `GUMROAD_GITHUB_ACCESS__GUMROAD__SELLER_ID=...` -> `gumroad.seller_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.github.validate(&self.server.environment)?;
        self.gumroad.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
