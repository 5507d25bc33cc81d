//! GitHub adapter.
//!
//! Implements the `IdentitySearch` and `TeamMembership` ports, including:
//! - User search by email with text-match fragments
//! - Adding and removing members of the access team
//!
//! # Configuration
//!
//! Required environment variables:
//! - `GUMROAD_GITHUB_ACCESS__GITHUB__TOKEN`: token with `admin:org` scope
//! - `GUMROAD_GITHUB_ACCESS__GITHUB__TEAM_MEMBERSHIP_URL`: team memberships URL

mod api_types;
mod github_adapter;
mod mock_github;

pub use api_types::{SearchUserItem, SearchUsersResponse, TextMatch, TEXT_MATCH_MEDIA_TYPE};
pub use github_adapter::GitHubAdapter;
pub use mock_github::{GitHubCall, MockGitHub};
