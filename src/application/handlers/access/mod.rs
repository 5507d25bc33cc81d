//! Access handlers.
//!
//! ## Commands
//! - Processing Gumroad sale and refund pings

mod handle_sale_webhook;

pub use handle_sale_webhook::{HandleSaleWebhookCommand, HandleSaleWebhookHandler};
