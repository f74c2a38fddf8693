use std::sync::{Arc, Mutex, PoisonError};

/// The coarse navigation states the client cares about. `Login` is the
/// unauthenticated entry screen; everything behind authentication is
/// `Dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Tracks which screen the client currently shows, replacing the
/// original's reads of the window location with an injectable value.
/// The client redirects through this on refresh failure; the session
/// navigates on login/logout.
#[derive(Clone)]
pub struct Navigator {
    current: Arc<Mutex<Screen>>,
}

impl Navigator {
    pub fn new(initial: Screen) -> Self {
        Self {
            current: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn current(&self) -> Screen {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn navigate(&self, to: Screen) {
        tracing::debug!(?to, "navigating");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = to;
    }
}
