//! GitHub REST API payloads.
//!
//! Only the fields this service reads are modelled; everything else in the
//! responses is ignored.

use serde::Deserialize;

/// Media type that makes the search API return `text_matches`.
pub const TEXT_MATCH_MEDIA_TYPE: &str = "application/vnd.github.v3.text-match+json";

/// Response of `GET /search/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersResponse {
    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub items: Vec<SearchUserItem>,
}

/// One user in a search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUserItem {
    pub login: String,

    #[serde(default)]
    pub text_matches: Vec<TextMatch>,
}

/// Highlighted fragment explaining why an item matched.
#[derive(Debug, Clone, Deserialize)]
pub struct TextMatch {
    #[serde(default)]
    pub property: String,

    #[serde(default)]
    pub fragment: String,
}

impl SearchUserItem {
    /// True when one of the text matches is the email, character for character.
    pub fn matches_email(&self, email: &str) -> bool {
        self.text_matches
            .iter()
            .any(|m| m.property == "email" && m.fragment == email)
    }
}

impl SearchUsersResponse {
    /// Login of the first item whose email fragment equals `email`.
    pub fn login_for_email(&self, email: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.matches_email(email))
            .map(|item| item.login.as_str())
    }
}
