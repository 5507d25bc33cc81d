//! End-to-end tests for the Gumroad ping endpoint.
//!
//! The full router runs against the real `GitHubAdapter`, with GitHub played
//! by a wiremock server. Each test checks the HTTP reply to Gumroad and the
//! exact requests that reached GitHub.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gumroad_github_access::adapters::github::GitHubAdapter;
use gumroad_github_access::adapters::http::{app_router, AccessAppState};
use gumroad_github_access::config::GitHubConfig;
use gumroad_github_access::domain::access::SellerVerifier;

const TEAM_PATH: &str = "/orgs/acme/teams/buyers/memberships";
const SELLER_ID: &str = "S1";

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(github: &MockServer) -> Router {
    let config = GitHubConfig::new("ghp_test", format!("{}{}", github.uri(), TEAM_PATH))
        .with_api_base_url(github.uri());
    let adapter = Arc::new(GitHubAdapter::new(config).unwrap());

    app_router(AccessAppState::new(
        adapter.clone(),
        adapter,
        SellerVerifier::new(SecretString::new(SELLER_ID.to_string())),
    ))
}

async fn ping(github: &MockServer, body: &'static str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let response = app(github).oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

/// Method and path of every request GitHub received, in order.
async fn github_requests(github: &MockServer) -> Vec<(String, String)> {
    github
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect()
}

async fn mount_search(github: &MockServer, email: &str, login: &str) {
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", email))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "items": [{
                "login": login,
                "text_matches": [{ "property": "email", "fragment": email }]
            }]
        })))
        .mount(github)
        .await;
}

fn member_path(login: &str) -> String {
    format!("{}/{}", TEAM_PATH, login)
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn wrong_seller_never_reaches_github() {
    let github = MockServer::start().await;
    mount_search(&github, "u@x.com", "octocat").await;

    let (status, body) = ping(&github, "email=u%40x.com&seller_id=WRONG&refunded=false").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert!(github_requests(&github).await.is_empty());
}

#[tokio::test]
async fn unmatched_email_searches_but_never_mutates() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 0,
            "items": []
        })))
        .mount(&github)
        .await;

    let (status, _) = ping(&github, "email=nomatch%40x.com&seller_id=S1&refunded=false").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        github_requests(&github).await,
        vec![("GET".to_string(), "/search/users".to_string())]
    );
}

#[tokio::test]
async fn sale_adds_buyer_to_team() {
    let github = MockServer::start().await;
    mount_search(&github, "u@x.com", "octocat").await;
    Mock::given(method("PUT"))
        .and(path(member_path("octocat")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "pending",
            "role": "member"
        })))
        .expect(1)
        .mount(&github)
        .await;

    let (status, body) = ping(&github, "email=u%40x.com&seller_id=S1&refunded=false").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(
        github_requests(&github).await,
        vec![
            ("GET".to_string(), "/search/users".to_string()),
            ("PUT".to_string(), member_path("octocat")),
        ]
    );
}

#[tokio::test]
async fn refund_removes_buyer_even_when_github_refuses() {
    let github = MockServer::start().await;
    mount_search(&github, "u@x.com", "octocat").await;
    Mock::given(method("DELETE"))
        .and(path(member_path("octocat")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&github)
        .await;

    let (status, _) = ping(&github, "email=u%40x.com&seller_id=S1&refunded=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        github_requests(&github).await,
        vec![
            ("GET".to_string(), "/search/users".to_string()),
            ("DELETE".to_string(), member_path("octocat")),
        ]
    );
}

#[tokio::test]
async fn refunded_flag_other_than_true_is_a_sale() {
    let github = MockServer::start().await;
    mount_search(&github, "u@x.com", "octocat").await;
    Mock::given(method("PUT"))
        .and(path(member_path("octocat")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&github)
        .await;

    let (status, _) = ping(&github, "email=u%40x.com&seller_id=S1&refunded=TRUE").await;

    assert_eq!(status, StatusCode::OK);
    let methods: Vec<String> = github_requests(&github)
        .await
        .into_iter()
        .map(|(m, _)| m)
        .collect();
    assert_eq!(methods, vec!["GET".to_string(), "PUT".to_string()]);
}

#[tokio::test]
async fn search_failure_is_acknowledged_without_mutation() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
        .mount(&github)
        .await;

    let (status, _) = ping(&github, "email=u%40x.com&seller_id=S1&refunded=false").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(github_requests(&github).await.len(), 1);
}

#[tokio::test]
async fn empty_ping_is_acknowledged_without_calls() {
    let github = MockServer::start().await;

    let (status, body) = ping(&github, "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert!(github_requests(&github).await.is_empty());
}
