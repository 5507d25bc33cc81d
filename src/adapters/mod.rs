//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `github` - GitHub REST API (user search, team membership) plus an in-memory mock
//! - `http` - Axum endpoint receiving Gumroad pings

pub mod github;
pub mod http;
