//! Result of an applied Gumroad ping.

use super::login::GitHubLogin;

/// Team change made for a verified ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Buyer was added to the team.
    Granted { login: GitHubLogin },
    /// Refunded buyer was removed from the team.
    Revoked { login: GitHubLogin },
}

impl AccessOutcome {
    pub fn login(&self) -> &GitHubLogin {
        match self {
            AccessOutcome::Granted { login } | AccessOutcome::Revoked { login } => login,
        }
    }

    /// Stable label used as the `outcome` field in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessOutcome::Granted { .. } => "granted",
            AccessOutcome::Revoked { .. } => "revoked",
        }
    }
}
