//! Axum router configuration for the Gumroad ping endpoint.

use axum::{routing::post, Router};

use super::handlers::{handle_gumroad_ping, AccessAppState};

/// Create the access router.
///
/// # Routes
///
/// - `POST /` - Handle Gumroad sale and refund pings (no auth, seller id verified)
///
/// Other methods on `/` answer `405 Method Not Allowed`.
pub fn access_routes() -> Router<AccessAppState> {
    Router::new().route("/", post(handle_gumroad_ping))
}
