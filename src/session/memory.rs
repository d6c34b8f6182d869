use std::sync::RwLock;

use super::{SessionError, SessionStore};

/// Non-persistent store for tests and short-lived embedding contexts,
/// where no profile storage exists and requests go out unauthenticated
/// until a token is set.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    token: RwLock<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|token| !token.trim().is_empty())
    }

    fn store_access_token(&self, token: &str) -> Result<(), SessionError> {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn stores_and_clears_single_token() {
        let store = InMemorySessionStore::new();
        store.store_access_token("abc").unwrap();
        assert_eq!(store.access_token(), Some("abc".to_string()));

        store.store_access_token("def").unwrap();
        assert_eq!(store.access_token(), Some("def".to_string()));

        store.clear().unwrap();
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn blank_token_reads_as_absent() {
        let store = InMemorySessionStore::with_token("   ");
        assert_eq!(store.access_token(), None);
    }
}
