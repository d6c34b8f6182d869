//! Review Service Connector
//!
//! This module is the adapter for the remote ReviewBattle API. All network
//! I/O goes through it so the rest of the crate stays independent and
//! testable.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `connector.rs` → allows mocking in tests
//! 2. Implement HTTP client in `client.rs`
//! 3. Configuration in `config.rs`
//! 4. Inject the trait object into callers → callers never depend on
//!    the HTTP implementation
//!
//! The HTTP client decorates every outgoing request with the bearer token
//! from the injected session store and nothing more: no retries, no
//! status-code policy, no caching. Callers own all of that.

pub mod config;
pub mod errors;
pub mod review_service;

pub use config::ReviewServiceConfig;
pub use errors::ConnectorError;
pub use review_service::{
    AchievementWinner, AdminSummary, Battle, LoginSession, Movie, Review, ReviewDraft,
    ReviewPatch, ReviewServiceClient, ReviewServiceConnector, UserAccount, Watchlist,
};
