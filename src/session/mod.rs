//! Session token storage.
//!
//! The API uses one bearer token per signed-in profile. Stores hold that
//! single token and nothing else: written on login, read on every
//! authenticated request, cleared on logout. An absent token means the
//! caller is anonymous. Stores are injected into the client rather than
//! read from ambient global state, so tests can swap in an in-memory one.

mod file_store;
mod memory;

pub use file_store::FileSessionStore;
pub use memory::InMemorySessionStore;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("failed to persist session token: {0}")]
    Io(#[from] std::io::Error),
}

/// Single-token credential store.
///
/// Concurrent writers race read-then-write with no transactional
/// guarantee, matching the original single-profile storage semantics.
pub trait SessionStore: Send + Sync {
    /// Current bearer token, `None` when anonymous. Empty or
    /// whitespace-only stored content reads as absent.
    fn access_token(&self) -> Option<String>;

    /// Replace the stored token. At most one token exists per store.
    fn store_access_token(&self, token: &str) -> Result<(), SessionError>;

    /// Drop the stored token, returning the store to the anonymous state.
    fn clear(&self) -> Result<(), SessionError>;
}
