use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use super::connector::ReviewServiceConnector;
use super::types::{
    AchievementWinner, AdminSummary, Battle, LoginSession, Movie, Review, ReviewDraft,
    ReviewPatch, UserAccount, Watchlist,
};
use crate::auth::bearer_value;
use crate::connectors::config::ReviewServiceConfig;
use crate::connectors::errors::ConnectorError;
use crate::session::{SessionError, SessionStore};

/// HTTP-based ReviewBattle API client.
///
/// Every request except login/register is decorated with the bearer token
/// from the injected session store, when one is present. The client does
/// not retry, back off, or reinterpret responses beyond classifying the
/// status code into a [`ConnectorError`] variant.
pub struct ReviewServiceClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) session: Arc<dyn SessionStore>,
}

impl ReviewServiceClient {
    /// Create a new client against the configured base URL
    pub fn new(config: ReviewServiceConfig, session: Arc<dyn SessionStore>) -> Self {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            session,
        }
    }

    /// Drop the stored session token. Purely local: the server keeps no
    /// session state to invalidate.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.session.clear()
    }

    /// Identity of the signed-in user, from the stored token's claims
    pub fn current_user_id(&self) -> Option<String> {
        let token = self.session.access_token()?;
        crate::auth::user_id_from_token(Some(&token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the Authorization header when a token is stored. Requests
    /// without a stored token go out unmodified; caller-supplied headers
    /// on the builder are preserved.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.access_token() {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, bearer_value(&token)),
            None => req,
        }
    }

    /// Map non-success statuses onto the connector error taxonomy
    async fn check_status(
        resp: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, ConnectorError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let detail = resp.text().await.unwrap_or_default();
        tracing::error!("{} returned {}: {}", context, status, detail);
        Err(match status.as_u16() {
            401 | 403 => ConnectorError::Unauthorized(format!("{}: {}", context, detail)),
            404 => ConnectorError::NotFound(context.to_string()),
            429 => ConnectorError::RateLimited(context.to_string()),
            _ => ConnectorError::HttpError(format!("{} returned {}: {}", context, status, detail)),
        })
    }

    async fn parse_json<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ConnectorError> {
        let text = resp
            .text()
            .await
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;
        serde_json::from_str::<T>(&text).map_err(|_| ConnectorError::InvalidResponse(text))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ConnectorError> {
        let resp = self
            .authorize(self.http_client.get(self.url(path)))
            .send()
            .await?;
        let resp = Self::check_status(resp, context).await?;
        Self::parse_json(resp).await
    }

    async fn patch_no_content(&self, path: &str, context: &str) -> Result<(), ConnectorError> {
        let resp = self
            .authorize(self.http_client.patch(self.url(path)))
            .send()
            .await?;
        Self::check_status(resp, context).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReviewServiceConnector for ReviewServiceClient {
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginSession, ConnectorError> {
        let span = tracing::info_span!("review_service_login", username = %username);

        let payload = serde_json::json!({
            "username": username,
            "password": password,
        });

        // Login goes out bare: there is no token yet to attach.
        let resp = self
            .http_client
            .post(self.url("/login"))
            .json(&payload)
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp, "login").await?;
        let session: LoginSession = Self::parse_json(resp).await?;

        self.session.store_access_token(&session.access_token)?;
        tracing::info!("stored access token for {}", username);
        Ok(session)
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserAccount, ConnectorError> {
        let span = tracing::info_span!("review_service_register", username = %username);

        let payload = serde_json::json!({
            "username": username,
            "password": password,
        });

        let resp = self
            .http_client
            .post(self.url("/users"))
            .json(&payload)
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp, "register").await?;
        Self::parse_json(resp).await
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, ConnectorError> {
        self.get_json("/movies", "list_movies").await
    }

    async fn get_movie(&self, movie_id: i64) -> Result<Movie, ConnectorError> {
        let span = tracing::info_span!("review_service_get_movie", movie_id);
        async { self.get_json(&format!("/movies/{}", movie_id), "get_movie").await }
            .instrument(span)
            .await
    }

    async fn search_movies(&self, title: &str) -> Result<Vec<Movie>, ConnectorError> {
        let span = tracing::info_span!("review_service_search_movies", title = %title);
        let path = format!("/movies/search?title={}", urlencoding::encode(title));
        async { self.get_json(&path, "search_movies").await }
            .instrument(span)
            .await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, ConnectorError> {
        self.get_json("/reviews", "list_reviews").await
    }

    async fn get_review(&self, review_id: i64) -> Result<Review, ConnectorError> {
        let span = tracing::info_span!("review_service_get_review", review_id);
        async { self.get_json(&format!("/reviews/{}", review_id), "get_review").await }
            .instrument(span)
            .await
    }

    async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, ConnectorError> {
        let span = tracing::info_span!("review_service_create_review", movie_id = draft.movie_id);

        let resp = self
            .authorize(self.http_client.post(self.url("/reviews")).json(draft))
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp, "create_review").await?;
        Self::parse_json(resp).await
    }

    async fn update_review(
        &self,
        review_id: i64,
        patch: &ReviewPatch,
    ) -> Result<Review, ConnectorError> {
        let span = tracing::info_span!("review_service_update_review", review_id);

        let resp = self
            .authorize(
                self.http_client
                    .put(self.url(&format!("/reviews/{}", review_id)))
                    .json(patch),
            )
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp, "update_review").await?;
        Self::parse_json(resp).await
    }

    async fn delete_review(&self, review_id: i64) -> Result<(), ConnectorError> {
        let span = tracing::info_span!("review_service_delete_review", review_id);

        let resp = self
            .authorize(
                self.http_client
                    .delete(self.url(&format!("/reviews/{}", review_id))),
            )
            .send()
            .instrument(span)
            .await?;
        Self::check_status(resp, "delete_review").await?;
        Ok(())
    }

    async fn flag_review(&self, review_id: i64) -> Result<(), ConnectorError> {
        let span = tracing::info_span!("review_service_flag_review", review_id);

        let resp = self
            .authorize(
                self.http_client
                    .post(self.url(&format!("/reviews/{}/flag", review_id))),
            )
            .send()
            .instrument(span)
            .await?;
        Self::check_status(resp, "flag_review").await?;
        Ok(())
    }

    async fn start_battle(&self) -> Result<Battle, ConnectorError> {
        let span = tracing::info_span!("review_service_start_battle");

        let resp = self
            .authorize(self.http_client.post(self.url("/battles")))
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp, "start_battle").await?;
        Self::parse_json(resp).await
    }

    async fn get_battle(&self, battle_id: &Uuid) -> Result<Battle, ConnectorError> {
        let span = tracing::info_span!("review_service_get_battle", battle_id = %battle_id);
        async {
            self.get_json(&format!("/battles/{}", battle_id), "get_battle")
                .await
        }
        .instrument(span)
        .await
    }

    async fn submit_vote(
        &self,
        battle_id: &Uuid,
        winner_id: i64,
    ) -> Result<(), ConnectorError> {
        let span =
            tracing::info_span!("review_service_submit_vote", battle_id = %battle_id, winner_id);

        let payload = serde_json::json!({ "winnerId": winner_id });
        let resp = self
            .authorize(
                self.http_client
                    .post(self.url(&format!("/battles/{}/votes", battle_id)))
                    .json(&payload),
            )
            .send()
            .instrument(span)
            .await?;
        Self::check_status(resp, "submit_vote").await?;
        Ok(())
    }

    async fn leaderboard(&self, limit: u32) -> Result<Vec<Review>, ConnectorError> {
        let span = tracing::info_span!("review_service_leaderboard", limit);
        let path = format!("/leaderboard?limit={}", limit);
        async { self.get_json(&path, "leaderboard").await }
            .instrument(span)
            .await
    }

    async fn achievements(&self) -> Result<Vec<AchievementWinner>, ConnectorError> {
        self.get_json("/achievements", "achievements").await
    }

    async fn watchlist(&self) -> Result<Watchlist, ConnectorError> {
        self.get_json("/watchlist", "watchlist").await
    }

    async fn add_to_watchlist(&self, movie_id: &str) -> Result<Watchlist, ConnectorError> {
        let span = tracing::info_span!("review_service_add_to_watchlist", movie_id = %movie_id);

        let path = format!("/watchlist/add?movieId={}", urlencoding::encode(movie_id));
        let resp = self
            .authorize(self.http_client.post(self.url(&path)))
            .send()
            .instrument(span)
            .await?;
        let resp = Self::check_status(resp, "add_to_watchlist").await?;
        Self::parse_json(resp).await
    }

    async fn home(&self) -> Result<Vec<Review>, ConnectorError> {
        self.get_json("/home", "home").await
    }

    async fn admin_summary(&self) -> Result<AdminSummary, ConnectorError> {
        self.get_json("/admin", "admin_summary").await
    }

    async fn warn_user(&self, user_id: &str) -> Result<(), ConnectorError> {
        self.patch_no_content(&format!("/users/{}/warn", user_id), "warn_user")
            .await
    }

    async fn unwarn_user(&self, user_id: &str) -> Result<(), ConnectorError> {
        self.patch_no_content(&format!("/users/{}/unwarn", user_id), "unwarn_user")
            .await
    }

    async fn ban_user(&self, user_id: &str) -> Result<(), ConnectorError> {
        self.patch_no_content(&format!("/users/{}/ban", user_id), "ban_user")
            .await
    }

    async fn unban_user(&self, user_id: &str) -> Result<(), ConnectorError> {
        self.patch_no_content(&format!("/users/{}/unban", user_id), "unban_user")
            .await
    }

    async fn hide_review(&self, review_id: i64) -> Result<(), ConnectorError> {
        self.patch_no_content(&format!("/reviews/{}/hide", review_id), "hide_review")
            .await
    }

    async fn unflag_review(&self, review_id: i64) -> Result<(), ConnectorError> {
        self.patch_no_content(&format!("/reviews/{}/unflag", review_id), "unflag_review")
            .await
    }
}
