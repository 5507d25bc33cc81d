//! HTTP adapter for the Gumroad ping endpoint.
//!
//! - `POST /` - Gumroad sale/refund ping, always answered with `200 OK`

pub mod handlers;
pub mod routes;

pub use handlers::{handle_gumroad_ping, AccessAppState};
pub use routes::access_routes;
