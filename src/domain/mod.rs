//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `access` - Gumroad ping decoding, seller verification and access outcomes

pub mod access;
