pub mod client;
pub mod connector;
pub mod mock;
pub mod types;


pub use client::ReviewServiceClient;
pub use connector::ReviewServiceConnector;
pub use types::{
    AchievementWinner, AdminSummary, Battle, LoginSession, Movie, Review, ReviewDraft,
    ReviewPatch, UserAccount, Watchlist,
};
