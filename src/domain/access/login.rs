//! GitHub username value object.

use std::fmt;

use thiserror::Error;

/// Longest username GitHub accepts.
const MAX_LOGIN_LEN: usize = 39;

/// A GitHub username resolved from a buyer's email.
///
/// Logins are interpolated into team membership URLs, so only the
/// characters GitHub allows are accepted: ASCII alphanumerics, `-` and
/// the `_` of enterprise managed users (`name_shortcode`), not starting
/// with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubLogin(String);

/// Rejected GitHub username.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid GitHub login {login:?}: {reason}")]
pub struct InvalidLogin {
    pub login: String,
    pub reason: &'static str,
}

impl GitHubLogin {
    pub fn new(login: impl Into<String>) -> Result<Self, InvalidLogin> {
        let login = login.into();
        let reason = if login.is_empty() {
            Some("empty")
        } else if login.len() > MAX_LOGIN_LEN {
            Some("too long")
        } else if login.starts_with('-') {
            Some("leading hyphen")
        } else if !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            Some("unexpected character")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidLogin { login, reason }),
            None => Ok(Self(login)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GitHubLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
