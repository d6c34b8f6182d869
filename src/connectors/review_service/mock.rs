//! In-process connector mock for tests that exercise callers without
//! HTTP. Returns a small fixed catalog and echoes writes back.

use chrono::NaiveDate;
use uuid::Uuid;

use super::connector::ReviewServiceConnector;
use super::types::{
    AchievementWinner, AdminSummary, Battle, LoginSession, Movie, Review, ReviewDraft,
    ReviewPatch, UserAccount, Watchlist,
};
use crate::connectors::errors::ConnectorError;
use crate::helpers::AuthorId;

pub struct MockReviewServiceConnector;

fn sample_movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        description: "A test movie".to_string(),
        duration: 120,
        genre: "Drama".to_string(),
        release: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    }
}

fn sample_review(id: i64, movie_id: i64, votes: i64) -> Review {
    Review {
        id,
        movie_id,
        author_id: AuthorId::Text("user-1".to_string()),
        rating: 4.0,
        review_title: format!("Review {}", id),
        review_body: "Solid picture.".to_string(),
        flagged: false,
        votes,
    }
}

#[async_trait::async_trait]
impl ReviewServiceConnector for MockReviewServiceConnector {
    async fn login(
        &self,
        _username: &str,
        _password: &str,
    ) -> Result<LoginSession, ConnectorError> {
        Ok(LoginSession {
            access_token: "test_token".to_string(),
            token_type: "bearer".to_string(),
        })
    }

    async fn register(
        &self,
        username: &str,
        _password: &str,
    ) -> Result<UserAccount, ConnectorError> {
        Ok(UserAccount {
            id: "user-1".to_string(),
            username: username.to_string(),
            role: "user".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            active: true,
        })
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, ConnectorError> {
        Ok(vec![
            sample_movie(1, "The First Cut"),
            sample_movie(2, "Second Screening"),
        ])
    }

    async fn get_movie(&self, movie_id: i64) -> Result<Movie, ConnectorError> {
        if movie_id == 1 {
            Ok(sample_movie(1, "The First Cut"))
        } else {
            Err(ConnectorError::NotFound(format!(
                "Movie {} not found",
                movie_id
            )))
        }
    }

    async fn search_movies(&self, title: &str) -> Result<Vec<Movie>, ConnectorError> {
        let all = self.list_movies().await?;
        let needle = title.to_lowercase();
        Ok(all
            .into_iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, ConnectorError> {
        Ok(vec![sample_review(10, 1, 3), sample_review(11, 2, 7)])
    }

    async fn get_review(&self, review_id: i64) -> Result<Review, ConnectorError> {
        Ok(sample_review(review_id, 1, 3))
    }

    async fn create_review(&self, draft: &ReviewDraft) -> Result<Review, ConnectorError> {
        Ok(Review {
            id: 99,
            movie_id: draft.movie_id,
            author_id: draft.author_id.clone(),
            rating: draft.rating,
            review_title: draft.review_title.clone(),
            review_body: draft.review_body.clone(),
            flagged: false,
            votes: 0,
        })
    }

    async fn update_review(
        &self,
        review_id: i64,
        patch: &ReviewPatch,
    ) -> Result<Review, ConnectorError> {
        let mut review = sample_review(review_id, 1, patch.votes);
        review.rating = patch.rating;
        review.review_title = patch.review_title.clone();
        review.review_body = patch.review_body.clone();
        review.flagged = patch.flagged;
        Ok(review)
    }

    async fn delete_review(&self, _review_id: i64) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn flag_review(&self, _review_id: i64) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn start_battle(&self) -> Result<Battle, ConnectorError> {
        Ok(Battle {
            id: Uuid::new_v4(),
            review1_id: 10,
            review2_id: 11,
            winner_id: None,
            started_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            ended_at: None,
        })
    }

    async fn get_battle(&self, battle_id: &Uuid) -> Result<Battle, ConnectorError> {
        let mut battle = self.start_battle().await?;
        battle.id = *battle_id;
        Ok(battle)
    }

    async fn submit_vote(
        &self,
        _battle_id: &Uuid,
        winner_id: i64,
    ) -> Result<(), ConnectorError> {
        if winner_id == 10 || winner_id == 11 {
            Ok(())
        } else {
            Err(ConnectorError::HttpError(
                "winner is not part of this battle".to_string(),
            ))
        }
    }

    async fn leaderboard(&self, limit: u32) -> Result<Vec<Review>, ConnectorError> {
        let mut reviews = self.list_reviews().await?;
        reviews.sort_by(|a, b| b.votes.cmp(&a.votes));
        reviews.truncate(limit as usize);
        Ok(reviews)
    }

    async fn achievements(&self) -> Result<Vec<AchievementWinner>, ConnectorError> {
        Ok(vec![AchievementWinner {
            category: "most_reviews".to_string(),
            user_id: "user-1".to_string(),
            username: "jane".to_string(),
            value: 12,
            label: "Most reviews".to_string(),
            position: 1,
            tie_break_date: None,
            medal_color: Some("gold".to_string()),
        }])
    }

    async fn watchlist(&self) -> Result<Watchlist, ConnectorError> {
        Ok(Watchlist {
            id: 1,
            author_id: AuthorId::Text("user-1".to_string()),
            movie_ids: vec!["1".to_string()],
        })
    }

    async fn add_to_watchlist(&self, movie_id: &str) -> Result<Watchlist, ConnectorError> {
        let mut list = self.watchlist().await?;
        list.movie_ids.push(movie_id.to_string());
        Ok(list)
    }

    async fn home(&self) -> Result<Vec<Review>, ConnectorError> {
        Ok(vec![sample_review(10, 1, 3)])
    }

    async fn admin_summary(&self) -> Result<AdminSummary, ConnectorError> {
        Ok(AdminSummary {
            total_users: 2,
            warned_users: vec![],
            banned_users: vec![],
            flagged_reviews: vec![],
        })
    }

    async fn warn_user(&self, _user_id: &str) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn unwarn_user(&self, _user_id: &str) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn ban_user(&self, _user_id: &str) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn unban_user(&self, _user_id: &str) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn hide_review(&self, _review_id: i64) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn unflag_review(&self, _review_id: i64) -> Result<(), ConnectorError> {
        Ok(())
    }
}
