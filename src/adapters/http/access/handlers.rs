//! HTTP handlers for the Gumroad ping endpoint.
//!
//! The endpoint answers `200 OK` with an empty body on every path. Anything
//! else makes Gumroad retry the ping, and a retry cannot fix the usual
//! failure (the buyer's Gumroad email differs from their GitHub email),
//! which is resolved by hand instead.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::application::handlers::access::{HandleSaleWebhookCommand, HandleSaleWebhookHandler};
use crate::domain::access::{AccessError, AccessOutcome, SalePayload, SellerVerifier};
use crate::ports::{IdentitySearch, TeamMembership};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; the ports are Arc-wrapped.
#[derive(Clone)]
pub struct AccessAppState {
    pub identity_search: Arc<dyn IdentitySearch>,
    pub team_membership: Arc<dyn TeamMembership>,
    pub seller_verifier: SellerVerifier,
}

impl AccessAppState {
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

    pub fn webhook_handler(&self) -> HandleSaleWebhookHandler {
        HandleSaleWebhookHandler::new(
            self.identity_search.clone(),
            self.team_membership.clone(),
            self.seller_verifier.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST / - Handle a Gumroad sale or refund ping
pub async fn handle_gumroad_ping(
    State(state): State<AccessAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if body.is_empty() {
        tracing::info!(outcome = "empty_body", "Gumroad ping without body acknowledged");
        return StatusCode::OK;
    }

    let raw_body = String::from_utf8_lossy(&body);
    tracing::debug!(raw_body = %raw_body, "Gumroad payload received");

    let result = match SalePayload::from_form(&body) {
        Ok(payload) => {
            tracing::info!(
                sale_id = payload.sale_id.as_deref().unwrap_or_default(),
                product_permalink = payload.product_permalink.as_deref().unwrap_or_default(),
                email = %payload.email,
                refunded = payload.refunded,
                test = payload.test,
                "Gumroad payload decoded"
            );
            state
                .webhook_handler()
                .handle(HandleSaleWebhookCommand { payload })
                .await
        }
        Err(err) => Err(err),
    };

    report(&result, &raw_body, &headers);

    StatusCode::OK
}

/// Emit the single structured event that records how a ping ended.
fn report(result: &Result<AccessOutcome, AccessError>, raw_body: &str, headers: &HeaderMap) {
    match result {
        Ok(outcome) => {
            tracing::info!(
                outcome = outcome.kind(),
                login = %outcome.login(),
                "Gumroad ping applied"
            );
        }
        Err(err) if err.is_rejection() => {
            tracing::warn!(
                outcome = err.kind(),
                error = %err,
                raw_body = %raw_body,
                headers = %format_headers(headers),
                "Gumroad ping rejected"
            );
        }
        Err(err) => {
            tracing::error!(
                outcome = err.kind(),
                error = %err,
                "Gumroad ping could not be applied"
            );
        }
    }
}

/// Render headers as `name: value, name: value` for forensic logs.
fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            format!(
                "{}: {}",
                name.as_str(),
                value.to_str().unwrap_or("<binary>")
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
