use uuid::Uuid;

use super::types::{
    AchievementWinner, AdminSummary, Battle, LoginSession, Movie, Review, ReviewDraft,
    ReviewPatch, UserAccount, Watchlist,
};
use crate::connectors::errors::ConnectorError;

/// Trait for ReviewBattle API integration.
/// Allows mocking in tests and swapping implementations.
#[async_trait::async_trait]
pub trait ReviewServiceConnector: Send + Sync {
    /// Authenticate and obtain a bearer token.
    /// Calls POST /login with the username/password pair.
    async fn login(&self, username: &str, password: &str)
        -> Result<LoginSession, ConnectorError>;

    /// Register a new account via POST /users
    async fn register(&self, username: &str, password: &str)
        -> Result<UserAccount, ConnectorError>;

    /// List the movie catalog
    async fn list_movies(&self) -> Result<Vec<Movie>, ConnectorError>;

    /// Fetch a single movie by id
    async fn get_movie(&self, movie_id: i64) -> Result<Movie, ConnectorError>;

    /// Title search: GET /movies/search?title={title}, percent-encoded
    async fn search_movies(&self, title: &str) -> Result<Vec<Movie>, ConnectorError>;

    /// List all published reviews
    async fn list_reviews(&self) -> Result<Vec<Review>, ConnectorError>;

    /// Fetch a single review by id
    async fn get_review(&self, review_id: i64) -> Result<Review, ConnectorError>;

    /// Publish a new review
    async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, ConnectorError>;

    /// Replace an existing review's content
    async fn update_review(
        &self,
        review_id: i64,
        patch: &ReviewPatch,
    ) -> Result<Review, ConnectorError>;

    /// Delete a review
    async fn delete_review(&self, review_id: i64) -> Result<(), ConnectorError>;

    /// Flag a review for moderation
    async fn flag_review(&self, review_id: i64) -> Result<(), ConnectorError>;

    /// Ask the server to pair up two reviews for a new battle
    async fn start_battle(&self) -> Result<Battle, ConnectorError>;

    /// Fetch battle state
    async fn get_battle(&self, battle_id: &Uuid) -> Result<Battle, ConnectorError>;

    /// Cast the deciding vote: POST /battles/{id}/votes with the winning
    /// review id. The server ends the battle and tallies the vote.
    async fn submit_vote(&self, battle_id: &Uuid, winner_id: i64) -> Result<(), ConnectorError>;

    /// Top reviews by votes, server-ranked
    async fn leaderboard(&self, limit: u32) -> Result<Vec<Review>, ConnectorError>;

    /// Current achievement holders per category
    async fn achievements(&self) -> Result<Vec<AchievementWinner>, ConnectorError>;

    /// The signed-in user's watchlist
    async fn watchlist(&self) -> Result<Watchlist, ConnectorError>;

    /// Add a movie to the signed-in user's watchlist
    async fn add_to_watchlist(&self, movie_id: &str) -> Result<Watchlist, ConnectorError>;

    /// The signed-in user's own reviews (GET /home)
    async fn home(&self) -> Result<Vec<Review>, ConnectorError>;

    /// Moderation dashboard summary (admin role required server-side)
    async fn admin_summary(&self) -> Result<AdminSummary, ConnectorError>;

    /// Moderation: issue a warning to a user
    async fn warn_user(&self, user_id: &str) -> Result<(), ConnectorError>;

    /// Moderation: retract a user's warning
    async fn unwarn_user(&self, user_id: &str) -> Result<(), ConnectorError>;

    /// Moderation: deactivate a user account
    async fn ban_user(&self, user_id: &str) -> Result<(), ConnectorError>;

    /// Moderation: reactivate a user account
    async fn unban_user(&self, user_id: &str) -> Result<(), ConnectorError>;

    /// Moderation: hide a flagged review from listings
    async fn hide_review(&self, review_id: i64) -> Result<(), ConnectorError>;

    /// Moderation: clear a review's flag
    async fn unflag_review(&self, review_id: i64) -> Result<(), ConnectorError>;
}
