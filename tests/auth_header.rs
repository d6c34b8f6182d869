mod common;

use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

use reviewbattle_client::connectors::ReviewServiceConnector;
use reviewbattle_client::session::SessionStore;

#[tokio::test]
async fn stored_token_is_sent_as_bearer_header() {
    let app = common::spawn_client().await;
    app.session.store_access_token("abc").unwrap();

    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.list_movies().await.unwrap();
}

#[tokio::test]
async fn prefixed_token_is_not_double_prefixed() {
    let app = common::spawn_client().await;
    app.session.store_access_token("Bearer abc").unwrap();

    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.list_movies().await.unwrap();
}

#[tokio::test]
async fn anonymous_request_carries_no_authorization_header() {
    let app = common::spawn_client().await;

    // Trip this mock if any Authorization header sneaks in.
    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.list_movies().await.unwrap();
}

#[tokio::test]
async fn login_goes_out_bare_and_stores_the_token() {
    let app = common::spawn_client().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access_token": "tok123",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let session = app.client.login("jane", "s3cret123").await.unwrap();
    assert_eq!(session.access_token, "tok123");
    assert_eq!(app.session.access_token(), Some("tok123".to_string()));

    // Follow-up requests reuse the stored token.
    Mock::given(method("GET"))
        .and(path("/home"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.home().await.unwrap();
}

#[tokio::test]
async fn sign_out_clears_the_stored_token() {
    let app = common::spawn_client().await;
    app.session.store_access_token("abc").unwrap();

    app.client.sign_out().unwrap();
    assert_eq!(app.session.access_token(), None);
}
