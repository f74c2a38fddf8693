use std::sync::{Arc, Mutex, PoisonError};

/// Access/refresh credential pair. Both fields travel together: the store
/// never exposes one without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// In-memory credential store, scoped to the process. Nothing is ever
/// written to disk; dropping the store (or the process) forgets the
/// session.
///
/// The whole pair sits behind one mutex so `set`/`clear` are atomic: a
/// reader can never observe a fresh access token alongside a stale
/// refresh token.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<Mutex<Option<TokenPair>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored pair. Takes effect for the next request issued.
    pub fn set(&self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        *self.lock() = Some(TokenPair {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        });
    }

    /// Drop both tokens. Subsequent requests go out unauthenticated.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn access_token(&self) -> Option<String> {
        self.lock().as_ref().map(|pair| pair.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.lock().as_ref().map(|pair| pair.refresh_token.clone())
    }

    pub fn pair(&self) -> Option<TokenPair> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<TokenPair>> {
        // A poisoned lock only means another thread panicked mid-swap;
        // the Option inside is still a valid pair-or-nothing.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
