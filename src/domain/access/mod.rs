//! Access domain module.
//!
//! Turns a Gumroad sale ping into a GitHub team access decision.
//!
//! # Module Structure
//!
//! - `payload` - Decoded Gumroad ping (`SalePayload`)
//! - `login` - Validated GitHub username (`GitHubLogin`)
//! - `seller` - Shared seller secret check (`SellerVerifier`)
//! - `errors` - `AccessError` taxonomy
//! - `outcome` - `AccessOutcome` of a successfully applied ping

mod errors;
mod login;
mod outcome;
mod payload;
mod seller;

pub use errors::AccessError;
pub use login::{GitHubLogin, InvalidLogin};
pub use outcome::AccessOutcome;
pub use payload::SalePayload;
pub use seller::SellerVerifier;
