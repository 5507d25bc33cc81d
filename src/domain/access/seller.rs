//! Shared seller secret check.
//!
//! Gumroad pings carry no signature. The `seller_id` field is the only proof
//! that a ping comes from the configured Gumroad account, so it is compared
//! against the expected value before any GitHub call is made.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::errors::AccessError;

/// Verifies the `seller_id` of incoming pings.
#[derive(Debug, Clone)]
pub struct SellerVerifier {
    expected: SecretString,
}

impl SellerVerifier {
    pub fn new(expected: SecretString) -> Self {
        Self { expected }
    }

    /// Accept only a non-empty `seller_id` equal to the configured one.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::UnverifiedSeller` otherwise.
    pub fn verify(&self, seller_id: &str) -> Result<(), AccessError> {
        if self.is_verified(seller_id) {
            Ok(())
        } else {
            Err(AccessError::UnverifiedSeller)
        }
    }

    pub fn is_verified(&self, seller_id: &str) -> bool {
        let expected = self.expected.expose_secret();
        if seller_id.is_empty() || expected.is_empty() {
            return false;
        }
        seller_id.as_bytes().ct_eq(expected.as_bytes()).into()
    }
}
