//! Gumroad GitHub Access - webhook relay from Gumroad sales to a GitHub team.
//!
//! Receives Gumroad sale and refund pings, resolves the buyer's GitHub account
//! by email and adds it to, or removes it from, the team that gates access.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
