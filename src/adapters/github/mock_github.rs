//! Mock GitHub adapter for testing.
//!
//! Implements both GitHub ports in memory. Supports:
//! - Pre-configured email to login mappings
//! - Error injection per operation
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::access::GitHubLogin;
use crate::ports::{GitHubError, IdentitySearch, TeamMembership};

/// Recorded call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubCall {
    Search { email: String },
    AddMember { login: String },
    RemoveMember { login: String },
}

/// Mock GitHub adapter.
///
/// # Example
///
/// ```ignore
/// let github = MockGitHub::new().with_user("u@x.com", "octocat");
/// github.fail_remove(GitHubError::unexpected_status(404, "Not Found"));
///
/// // ... run the handler ...
///
/// assert_eq!(github.mutation_calls().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockGitHub {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    users: HashMap<String, String>,
    search_error: Option<GitHubError>,
    add_error: Option<GitHubError>,
    remove_error: Option<GitHubError>,
    calls: Vec<GitHubCall>,
}

impl MockGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GitHub account whose public email is `email`.
    pub fn with_user(self, email: impl Into<String>, login: impl Into<String>) -> Self {
        self.state().users.insert(email.into(), login.into());
        self
    }

    pub fn fail_search(&self, error: GitHubError) {
        self.state().search_error = Some(error);
    }

    pub fn fail_add(&self, error: GitHubError) {
        self.state().add_error = Some(error);
    }

    pub fn fail_remove(&self, error: GitHubError) {
        self.state().remove_error = Some(error);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<GitHubCall> {
        self.state().calls.clone()
    }

    /// Add and remove calls only.
    pub fn mutation_calls(&self) -> Vec<GitHubCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, GitHubCall::Search { .. }))
            .collect()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl IdentitySearch for MockGitHub {
    async fn find_login_by_email(&self, email: &str) -> Result<Option<GitHubLogin>, GitHubError> {
        let mut state = self.state();
        state.calls.push(GitHubCall::Search {
            email: email.to_string(),
        });

        if let Some(error) = state.search_error.clone() {
            return Err(error);
        }

        state
            .users
            .get(email)
            .map(|login| GitHubLogin::new(login.as_str()))
            .transpose()
            .map_err(|e| GitHubError::invalid_response(e.to_string()))
    }
}

#[async_trait]
impl TeamMembership for MockGitHub {
    async fn add_member(&self, login: &GitHubLogin) -> Result<(), GitHubError> {
        let mut state = self.state();
        state.calls.push(GitHubCall::AddMember {
            login: login.to_string(),
        });

        match state.add_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn remove_member(&self, login: &GitHubLogin) -> Result<(), GitHubError> {
        let mut state = self.state();
        state.calls.push(GitHubCall::RemoveMember {
            login: login.to_string(),
        });

        match state.remove_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
