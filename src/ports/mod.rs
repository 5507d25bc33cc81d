//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## GitHub Ports
//!
//! - `IdentitySearch` - Find a GitHub login by email
//! - `TeamMembership` - Add or remove a login from the access team

mod github_error;
mod identity_search;
mod team_membership;

pub use github_error::GitHubError;
pub use identity_search::IdentitySearch;
pub use team_membership::TeamMembership;
