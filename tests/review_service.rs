mod common;

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use reviewbattle_client::connectors::{ConnectorError, ReviewServiceConnector};
use reviewbattle_client::helpers::AuthorId;
use reviewbattle_client::session::SessionStore;

fn review_json(id: i64, votes: i64) -> serde_json::Value {
    json!({
        "id": id,
        "movieId": 1,
        "authorId": "jane.doe@example.com",
        "rating": 4.0,
        "reviewTitle": format!("Review {}", id),
        "reviewBody": "Tight pacing,   great score.",
        "flagged": false,
        "votes": votes
    })
}

#[tokio::test]
async fn search_movies_percent_encodes_the_title() {
    let app = common::spawn_client().await;

    Mock::given(method("GET"))
        .and(path("/movies/search"))
        .and(query_param("title", "the matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "title": "The Matrix",
            "description": "A hacker learns the truth",
            "duration": 136,
            "genre": "Sci-Fi",
            "release": "1999-03-31"
        }])))
        .expect(1)
        .mount(&app.server)
        .await;

    let movies = app.client.search_movies("the matrix").await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "The Matrix");
}

#[tokio::test]
async fn get_movie_maps_404_to_not_found() {
    let app = common::spawn_client().await;

    Mock::given(method("GET"))
        .and(path("/movies/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Movie not found"
        })))
        .mount(&app.server)
        .await;

    let err = app.client.get_movie(999).await.unwrap_err();
    assert!(matches!(err, ConnectorError::NotFound(_)));
}

#[tokio::test]
async fn expired_session_maps_to_unauthorized() {
    let app = common::spawn_client().await;
    app.session.store_access_token("stale").unwrap();

    Mock::given(method("GET"))
        .and(path("/watchlist"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Access Token Missing"
        })))
        .mount(&app.server)
        .await;

    let err = app.client.watchlist().await.unwrap_err();
    assert!(matches!(err, ConnectorError::Unauthorized(_)));
}

#[tokio::test]
async fn non_json_body_maps_to_invalid_response() {
    let app = common::spawn_client().await;

    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&app.server)
        .await;

    let err = app.client.list_movies().await.unwrap_err();
    match err {
        ConnectorError::InvalidResponse(body) => assert!(body.contains("proxy error")),
        other => panic!("expected InvalidResponse, got {}", other),
    }
}

#[tokio::test]
async fn submit_vote_posts_the_winner_id() {
    let app = common::spawn_client().await;
    let battle_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/battles/{}/votes", battle_id)))
        .and(body_json(json!({ "winnerId": 10 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client.submit_vote(&battle_id, 10).await.unwrap();
}

#[tokio::test]
async fn leaderboard_passes_the_limit_and_parses_reviews() {
    let app = common::spawn_client().await;

    Mock::given(method("GET"))
        .and(path("/leaderboard"))
        .and(query_param("limit", "15"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([review_json(1, 20), review_json(2, 12)])),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let reviews = app.client.leaderboard(15).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(
        reviews[0].author_id,
        AuthorId::Text("jane.doe@example.com".to_string())
    );
}

#[tokio::test]
async fn create_review_sends_camel_case_payload() {
    let app = common::spawn_client().await;
    app.session.store_access_token("tok").unwrap();

    let draft = reviewbattle_client::connectors::ReviewDraft {
        movie_id: 1,
        author_id: AuthorId::Numeric(42),
        rating: 4.5,
        review_title: "Great".to_string(),
        review_body: "Loved it".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/reviews"))
        .and(body_json(json!({
            "movieId": 1,
            "authorId": 42,
            "rating": 4.5,
            "reviewTitle": "Great",
            "reviewBody": "Loved it"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(review_json(99, 0)))
        .expect(1)
        .mount(&app.server)
        .await;

    let review = app.client.create_review(&draft).await.unwrap();
    assert_eq!(review.id, 99);
}

#[tokio::test]
async fn moderation_endpoints_use_patch() {
    let app = common::spawn_client().await;
    app.session.store_access_token("admin-token").unwrap();

    for route in [
        "/users/u1/warn",
        "/users/u1/unwarn",
        "/users/u1/ban",
        "/users/u1/unban",
        "/reviews/7/hide",
        "/reviews/7/unflag",
    ] {
        Mock::given(method("PATCH"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&app.server)
            .await;
    }

    app.client.warn_user("u1").await.unwrap();
    app.client.unwarn_user("u1").await.unwrap();
    app.client.ban_user("u1").await.unwrap();
    app.client.unban_user("u1").await.unwrap();
    app.client.hide_review(7).await.unwrap();
    app.client.unflag_review(7).await.unwrap();
}

#[tokio::test]
async fn current_user_id_comes_from_the_stored_token() {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    let app = common::spawn_client().await;
    assert_eq!(app.client.current_user_id(), None);

    let header = URL_SAFE_NO_PAD.encode(json!({"alg": "none"}).to_string());
    let payload = URL_SAFE_NO_PAD.encode(json!({"user_id": "u-42"}).to_string());
    let token = format!("{}.{}.sig", header, payload);

    app.session.store_access_token(&token).unwrap();
    assert_eq!(app.client.current_user_id(), Some("u-42".to_string()));
}
