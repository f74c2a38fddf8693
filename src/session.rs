//! Client-side session: single source of truth for who is logged in.
//!
//! The session never inspects tokens itself; it drives the auth endpoints
//! through the shared [`ApiClient`] and records the outcome. Token
//! storage stays with the client's [`TokenStore`].

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::auth;
use crate::client::{ApiClient, Screen};
use crate::errors::ApiError;
use crate::models::user::{LoginRequest, User};

#[derive(Debug, Clone)]
pub enum SessionState {
    /// Startup probe has not resolved yet.
    Loading,
    Authenticated(User),
    Anonymous,
}

pub struct Session {
    client: Arc<ApiClient>,
    state: Mutex<SessionState>,
}

impl Session {
    /// Create a session in `Loading`; call [`bootstrap`](Self::bootstrap)
    /// to resolve it.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: Mutex::new(SessionState::Loading),
        }
    }

    /// Resolve the startup state. On the login screen, or without a
    /// stored access token, this resolves `Anonymous` without touching
    /// the network; otherwise it probes `GET /api/auth/me` and clears the
    /// credentials if the probe fails.
    pub async fn bootstrap(&self) {
        if self.client.navigator().current() == Screen::Login {
            self.set_state(SessionState::Anonymous);
            return;
        }
        if self.client.tokens().access_token().is_none() {
            self.set_state(SessionState::Anonymous);
            return;
        }

        match auth::me(&self.client).await {
            Ok(user) => self.set_state(SessionState::Authenticated(user)),
            Err(err) => {
                tracing::debug!(error = %err, "startup identity probe failed");
                self.client.tokens().clear();
                self.set_state(SessionState::Anonymous);
            }
        }
    }

    /// Authenticate, store the issued token pair, resolve the identity,
    /// and move to the dashboard. Errors propagate to the caller (the
    /// form layer decides how to display them) and leave the session
    /// `Anonymous`.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let result = self.login_inner(credentials).await;
        if result.is_err() {
            self.set_state(SessionState::Anonymous);
        }
        result
    }

    async fn login_inner(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let tokens = auth::login(&self.client, credentials).await?;
        self.client
            .tokens()
            .set(tokens.access_token, tokens.refresh_token);

        let user = auth::me(&self.client).await?;
        self.set_state(SessionState::Authenticated(user.clone()));
        self.client.navigator().navigate(Screen::Dashboard);
        Ok(user)
    }

    /// End the session. The remote logout is best-effort: a failure is
    /// logged and swallowed so the local session always clears — a
    /// network error must never leave the user stuck logged in.
    pub async fn logout(&self) {
        if let Err(err) = auth::logout(&self.client).await {
            tracing::warn!(error = %err, "remote logout failed, clearing local session anyway");
        }
        self.client.tokens().clear();
        self.set_state(SessionState::Anonymous);
        self.client.navigator().navigate(Screen::Login);
    }

    pub fn state(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        match &*self.lock() {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(&*self.lock(), SessionState::Authenticated(_))
    }

    fn set_state(&self, state: SessionState) {
        *self.lock() = state;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
