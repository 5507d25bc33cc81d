//! HandleSaleWebhookHandler - Command handler for Gumroad sale and refund pings.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessOutcome, SalePayload, SellerVerifier};
use crate::ports::{IdentitySearch, TeamMembership};

/// Command to apply a decoded Gumroad ping.
#[derive(Debug, Clone)]
pub struct HandleSaleWebhookCommand {
    pub payload: SalePayload,
}

/// Handler that grants or revokes team access for a Gumroad buyer.
///
/// Steps, each short-circuiting on failure:
/// 1. Verify the shared `seller_id`
/// 2. Resolve the buyer's GitHub login by email
/// 3. Add the login to the team, or remove it when the sale was refunded
pub struct HandleSaleWebhookHandler {
    identity_search: Arc<dyn IdentitySearch>,
    team_membership: Arc<dyn TeamMembership>,
    seller_verifier: SellerVerifier,
}

impl HandleSaleWebhookHandler {
    pub fn new(
        identity_search: Arc<dyn IdentitySearch>,
        team_membership: Arc<dyn TeamMembership>,
        seller_verifier: SellerVerifier,
    ) -> Self {
        Self {
            identity_search,
            team_membership,
            seller_verifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleSaleWebhookCommand,
    ) -> Result<AccessOutcome, AccessError> {
        let payload = cmd.payload;

        // 1. Only pings from the configured seller are trusted
        self.seller_verifier.verify(&payload.seller_id)?;

        if payload.email.is_empty() {
            return Err(AccessError::malformed("missing email"));
        }

        // 2. Resolve the GitHub account
        tracing::info!(email = %payload.email, "Finding GitHub username for email");
        let login = self
            .identity_search
            .find_login_by_email(&payload.email)
            .await
            .map_err(|e| AccessError::search_failed(&payload.email, e))?
            .ok_or_else(|| AccessError::user_not_found(&payload.email))?;
        tracing::info!(email = %payload.email, login = %login, "GitHub username resolved");

        // 3. Apply the membership change
        if payload.refunded {
            self.team_membership
                .remove_member(&login)
                .await
                .map_err(|e| AccessError::revoke_failed(&login, e))?;
            tracing::info!(
                email = %payload.email,
                login = %login,
                "GitHub user removed from the team"
            );
            Ok(AccessOutcome::Revoked { login })
        } else {
            self.team_membership
                .add_member(&login)
                .await
                .map_err(|e| AccessError::grant_failed(&login, e))?;
            tracing::info!(
                email = %payload.email,
                login = %login,
                "GitHub user added to the team"
            );
            Ok(AccessOutcome::Granted { login })
        }
    }
}
