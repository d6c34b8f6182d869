use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::helpers::AuthorId;

/// Token pair returned by POST /login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSession {
    pub access_token: String,
    pub token_type: String,
}

/// Registered account as returned by the users endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub role: String,
    pub created_at: NaiveDate,
    pub active: bool,
}

/// Movie catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub genre: String,
    pub release: NaiveDate,
}

/// A published review. `author_id` is polymorphic on the wire: numeric
/// account ids, free-text ids, or null for anonymous content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub movie_id: i64,
    #[serde(default)]
    pub author_id: AuthorId,
    pub rating: f64,
    pub review_title: String,
    pub review_body: String,
    #[serde(default)]
    pub flagged: bool,
    #[serde(default)]
    pub votes: i64,
}

/// Payload for POST /reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub movie_id: i64,
    pub author_id: AuthorId,
    pub rating: f64,
    pub review_title: String,
    pub review_body: String,
}

/// Payload for PUT /reviews/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    pub rating: f64,
    pub review_title: String,
    pub review_body: String,
    #[serde(default)]
    pub flagged: bool,
    #[serde(default)]
    pub votes: i64,
}

/// A battle between two reviews. Open until a vote lands: `winner_id`
/// and `ended_at` stay null until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: Uuid,
    pub review1_id: i64,
    pub review2_id: i64,
    #[serde(default)]
    pub winner_id: Option<i64>,
    pub started_at: NaiveDateTime,
    #[serde(default)]
    pub ended_at: Option<NaiveDateTime>,
}

/// Per-category achievement leader
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementWinner {
    pub category: String,
    pub user_id: String,
    pub username: String,
    pub value: i64,
    pub label: String,
    #[serde(default = "default_position")]
    pub position: i64,
    #[serde(default)]
    pub tie_break_date: Option<String>,
    #[serde(default)]
    pub medal_color: Option<String>,
}

fn default_position() -> i64 {
    1
}

/// The signed-in user's watchlist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Watchlist {
    pub id: i64,
    pub author_id: AuthorId,
    pub movie_ids: Vec<String>,
}

/// Moderation dashboard summary from GET /admin. The per-user and
/// per-review entries are loosely shaped server-side, so they stay as
/// raw JSON for the caller to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSummary {
    pub total_users: i64,
    #[serde(default)]
    pub warned_users: Vec<Value>,
    #[serde(default)]
    pub banned_users: Vec<Value>,
    #[serde(default)]
    pub flagged_reviews: Vec<Value>,
}
