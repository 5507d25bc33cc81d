//! Gumroad ping payload.
//!
//! Gumroad posts sales and refunds as `application/x-www-form-urlencoded`
//! bodies. Only `email`, `seller_id` and `refunded` drive behaviour; the
//! other documented fields are decoded so they show up in logs.
//!
//! See <https://gumroad.com/ping>.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use super::errors::AccessError;

/// A decoded Gumroad sale ping.
///
/// Boolean flags are only `true` when the raw form value is exactly
/// `"true"`. When a key repeats, its first value wins. Nested keys such as
/// `url_params[...]` or `custom_fields[...]` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SalePayload {
    /// Buyer email, matched against GitHub profile emails.
    #[serde(default)]
    pub email: String,

    /// Shared secret identifying the seller account.
    #[serde(default)]
    pub seller_id: String,

    /// Set when the sale has been refunded.
    #[serde(default, deserialize_with = "flag")]
    pub refunded: bool,

    /// Set for test pings sent from the Gumroad dashboard.
    #[serde(default, deserialize_with = "flag")]
    pub test: bool,

    #[serde(default, deserialize_with = "flag")]
    pub is_recurring_charge: bool,

    #[serde(default, deserialize_with = "flag")]
    pub is_preorder_authorization: bool,

    #[serde(default, deserialize_with = "flag")]
    pub is_gift_receiver_purchase: bool,

    #[serde(default)]
    pub sale_id: Option<String>,

    #[serde(default)]
    pub sale_timestamp: Option<String>,

    #[serde(default)]
    pub order_number: Option<String>,

    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub product_permalink: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,

    #[serde(default)]
    pub short_product_id: Option<String>,

    #[serde(default)]
    pub purchaser_id: Option<String>,

    #[serde(default)]
    pub subscription_id: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub ip_country: Option<String>,

    /// Price in cents, kept verbatim.
    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub quantity: Option<String>,

    #[serde(default)]
    pub license_key: Option<String>,

    #[serde(default)]
    pub offer_code: Option<String>,

    #[serde(default)]
    pub recurrence: Option<String>,

    #[serde(default)]
    pub affiliate: Option<String>,

    #[serde(default)]
    pub affiliate_credit_amount_cents: Option<String>,

    #[serde(default)]
    pub gifter_email: Option<String>,

    #[serde(default)]
    pub gift_price: Option<String>,

    #[serde(default)]
    pub shipping_rate: Option<String>,
}

impl SalePayload {
    /// Decode a form-encoded ping body.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::MalformedPayload` when the body is not valid
    /// form encoding.
    pub fn from_form(body: &[u8]) -> Result<Self, AccessError> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).map_err(|e| AccessError::malformed(e.to_string()))?;

        let mut seen = HashSet::new();
        let first_values: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(key, _)| seen.insert(key.clone()))
            .collect();

        let canonical = serde_urlencoded::to_string(&first_values)
            .map_err(|e| AccessError::malformed(e.to_string()))?;
        serde_urlencoded::from_str(&canonical).map_err(|e| AccessError::malformed(e.to_string()))
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decodes_fields_of_interest() {
        let payload = SalePayload::from_form(b"email=a%40b.com&seller_id=X&refunded=true").unwrap();

        assert_eq!(payload.email, "a@b.com");
        assert_eq!(payload.seller_id, "X");
        assert!(payload.refunded);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let payload = SalePayload::from_form(b"sale_id=abc").unwrap();

        assert_eq!(payload.email, "");
        assert_eq!(payload.seller_id, "");
        assert!(!payload.refunded);
        assert_eq!(payload.sale_id.as_deref(), Some("abc"));
    }

    #[test]
    fn refunded_false_is_not_refunded() {
        let payload = SalePayload::from_form(b"email=a%40b.com&refunded=false").unwrap();
        assert!(!payload.refunded);
    }

    #[test]
    fn pass_through_fields_are_kept() {
        let body = b"email=buyer%40example.com&seller_id=S1&product_permalink=https%3A%2F%2Fgum.co%2Fbook\
&price=2900&currency=usd&test=true&full_name=Jane+Doe";
        let payload = SalePayload::from_form(body).unwrap();

        assert_eq!(
            payload.product_permalink.as_deref(),
            Some("https://gum.co/book")
        );
        assert_eq!(payload.price.as_deref(), Some("2900"));
        assert_eq!(payload.currency.as_deref(), Some("usd"));
        assert_eq!(payload.full_name.as_deref(), Some("Jane Doe"));
        assert!(payload.test);
    }

    #[test]
    fn nested_bracket_keys_are_ignored() {
        let body = b"email=a%40b.com&url_params%5Bsource%5D=twitter&custom_fields%5BGitHub%5D=octocat&variants%5BTier%5D=Pro";
        let payload = SalePayload::from_form(body).unwrap();
        assert_eq!(payload.email, "a@b.com");
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let payload = SalePayload::from_form(b"email=a%40b.com&email=c%40d.com&refunded=true&refunded=false")
            .unwrap();

        assert_eq!(payload.email, "a@b.com");
        assert!(payload.refunded);
    }

    #[test]
    fn repeated_pass_through_key_does_not_block_decoding() {
        let payload =
            SalePayload::from_form(b"email=u%40x.com&seller_id=S1&sale_id=a&sale_id=b").unwrap();

        assert_eq!(payload.seller_id, "S1");
        assert_eq!(payload.sale_id.as_deref(), Some("a"));
    }

    proptest! {
        #[test]
        fn only_literal_true_sets_refunded(raw in "[a-zA-Z0-9]{0,8}") {
            let body = serde_urlencoded::to_string([("refunded", raw.as_str())]).unwrap();
            let payload = SalePayload::from_form(body.as_bytes()).unwrap();
            prop_assert_eq!(payload.refunded, raw == "true");
        }
    }
}
