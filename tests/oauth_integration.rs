// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for refresh-token exchange and access-token caching

use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use strava_client::auth::{Credentials, TokenProvider};
use strava_client::client::StravaClient;
use strava_client::error::Error;

fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test_client_id".to_string(),
        client_secret: "test_client_secret".to_string(),
        refresh_token: "test_refresh_token".to_string(),
    }
}

#[tokio::test]
async fn test_ensure_token_sends_refresh_grant() {
    let mut server = Server::new_async().await;

    let token_mock = server
        .mock("POST", "/oauth/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client_id".into(), "test_client_id".into()),
            Matcher::UrlEncoded("client_secret".into(), "test_client_secret".into()),
            Matcher::UrlEncoded("refresh_token".into(), "test_refresh_token".into()),
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "fresh_token", "token_type": "Bearer"}).to_string())
        .create_async()
        .await;

    let provider = TokenProvider::new(
        test_credentials(),
        format!("{}/oauth/token", server.url()),
    );
    let http = reqwest::Client::new();

    let token = provider.ensure_token(&http).await.expect("token exchange failed");

    token_mock.assert_async().await;
    assert_eq!(token, "fresh_token");
}

#[tokio::test]
async fn test_ensure_token_is_cached_after_first_call() {
    let mut server = Server::new_async().await;

    // The endpoint must be hit exactly once across both calls
    let token_mock = server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "one_time_token"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let provider = TokenProvider::new(
        test_credentials(),
        format!("{}/oauth/token", server.url()),
    );
    let http = reqwest::Client::new();

    let first = provider.ensure_token(&http).await.expect("first exchange failed");
    let second = provider.ensure_token(&http).await.expect("second call failed");

    token_mock.assert_async().await;
    assert_eq!(first, "one_time_token");
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_client_reuses_token_across_requests() {
    let mut server = Server::new_async().await;

    let token_mock = server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "shared_token"}).to_string())
        .expect(1)
        .create_async()
        .await;

    let _athlete = server
        .mock("GET", "/athlete")
        .match_header("authorization", "Bearer shared_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": 12345}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = StravaClient::with_endpoints(
        test_credentials(),
        server.url(),
        format!("{}/oauth/token", server.url()),
    );

    client.get_athlete().await.expect("first request failed");
    client.get_athlete().await.expect("second request failed");

    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_token_exchange_carries_status() {
    let mut server = Server::new_async().await;

    let _token = server
        .mock("POST", "/oauth/token")
        .with_status(401)
        .with_body(json!({"message": "Authorization Error"}).to_string())
        .create_async()
        .await;

    let provider = TokenProvider::new(
        test_credentials(),
        format!("{}/oauth/token", server.url()),
    );
    let http = reqwest::Client::new();

    let error = provider.ensure_token(&http).await.expect_err("expected an error");

    match error {
        Error::Http { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("Authorization Error"));
        }
        other => panic!("Expected HTTP 401 error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_response_without_access_token_is_a_json_error() {
    let mut server = Server::new_async().await;

    let _token = server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token_type": "Bearer"}).to_string())
        .create_async()
        .await;

    let provider = TokenProvider::new(
        test_credentials(),
        format!("{}/oauth/token", server.url()),
    );
    let http = reqwest::Client::new();

    let error = provider.ensure_token(&http).await.expect_err("expected an error");

    assert!(matches!(error, Error::Json(_)));
    assert!(error.to_string().contains("access_token"));
}
