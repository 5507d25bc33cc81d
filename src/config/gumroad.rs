//! Gumroad configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Gumroad ping configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GumroadConfig {
    /// Seller id expected in every ping (acts as a shared secret)
    pub seller_id: SecretString,
}

impl GumroadConfig {
    pub fn new(seller_id: impl Into<String>) -> Self {
        Self {
            seller_id: SecretString::new(seller_id.into()),
        }
    }

    /// Validate Gumroad configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.seller_id.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("GUMROAD__SELLER_ID"));
        }
        Ok(())
    }
}
