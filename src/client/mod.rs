//! Authenticated HTTP client for the ShopDesk API.
//!
//! Wraps `reqwest` with bearer-token attachment and a single-shot
//! refresh-and-retry on authorization failures:
//! 1. Send the request with the current access token (if any).
//! 2. On 401/403 — and only when the request is not itself a login or
//!    refresh call, the client is not sitting on the login screen, and a
//!    refresh token exists — exchange the refresh token for a new pair
//!    and re-issue the original request exactly once.
//! 3. If the refresh is rejected, clear the credentials, force the login
//!    screen, and hand the original error back to the caller.
//!
//! Anything that is not a 401/403 passes through untouched.

mod screen;
mod tokens;

use std::time::Duration;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::errors::ApiError;

pub use screen::{Navigator, Screen};
pub use tokens::{TokenPair, TokenStore};

pub(crate) const LOGIN_PATH: &str = "/api/auth/login";
pub(crate) const LOGOUT_PATH: &str = "/api/auth/logout";
pub(crate) const ME_PATH: &str = "/api/auth/me";
pub(crate) const REFRESH_PATH: &str = "/api/auth/refresh";

pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    tokens: TokenStore,
    navigator: Navigator,
}

impl ApiClient {
    pub fn new(config: &Config, tokens: TokenStore, navigator: Navigator) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: Url::parse(&config.api_url)?,
            http,
            tokens,
            navigator,
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    // ── Typed wrappers ─────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.execute(Method::GET, path, None, None).await?).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        decode(self.execute(Method::GET, path, Some(query), None).await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        decode(self.execute(Method::POST, path, None, Some(body)).await?).await
    }

    /// POST without a request body, decoding the response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.execute(Method::POST, path, None, None).await?).await
    }

    /// POST without a request body, discarding the response body.
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::POST, path, None, None).await?;
        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        decode(self.execute(Method::PUT, path, None, Some(body)).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None, None).await?;
        Ok(())
    }

    // ── Request pipeline ───────────────────────────────────────

    /// Run one logical request through the refresh-and-retry machine.
    /// Returns the successful response; every failure path surfaces as
    /// `ApiError`.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, String)]>,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path)?;
        let bearer = self.tokens.access_token();
        let response = self
            .attempt(&method, &url, query, body.as_ref(), bearer.as_deref())
            .await?;

        if response.status().is_success() {
            return Ok(response);
        }
        let original = read_error(response).await;

        if !self.refresh_eligible(path, &original) {
            return Err(original);
        }

        match self.refresh().await {
            Ok(access_token) => {
                // One retry with the new token; its outcome is final.
                let retried = self
                    .attempt(&method, &url, query, body.as_ref(), Some(&access_token))
                    .await?;
                if retried.status().is_success() {
                    Ok(retried)
                } else {
                    Err(read_error(retried).await)
                }
            }
            Err(refresh_err) => {
                tracing::warn!(error = %refresh_err, "token refresh failed, clearing credentials");
                self.tokens.clear();
                if self.navigator.current() != Screen::Login {
                    self.navigator.navigate(Screen::Login);
                }
                Err(original)
            }
        }
    }

    async fn attempt(
        &self,
        method: &Method,
        url: &Url,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Guard conditions for entering the refresh path. Refresh and login
    /// requests are excluded so a failed refresh or login can never
    /// trigger another refresh, and nothing is attempted while the client
    /// is already on the login screen or holds no refresh token.
    fn refresh_eligible(&self, path: &str, error: &ApiError) -> bool {
        error.is_auth()
            && path != REFRESH_PATH
            && path != LOGIN_PATH
            && self.navigator.current() != Screen::Login
            && self.tokens.refresh_token().is_some()
    }

    /// Exchange the refresh token for a new pair. The refresh token rides
    /// in the Authorization header in place of the access token.
    async fn refresh(&self) -> Result<String, ApiError> {
        let refresh_token = self.tokens.refresh_token().ok_or(ApiError::Api {
            status: StatusCode::UNAUTHORIZED,
            detail: "no refresh token available".to_string(),
        })?;

        let url = self.endpoint(REFRESH_PATH)?;
        let response = self
            .attempt(&Method::POST, &url, None, None, Some(&refresh_token))
            .await?;
        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        let pair: crate::models::user::TokenResponse = response.json().await?;
        self.tokens.set(&pair.access_token, &pair.refresh_token);
        tracing::debug!("access token refreshed");
        Ok(pair.access_token)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(response.json().await?)
}

/// Build an `ApiError` from a non-success response, pulling the message
/// out of the backend's `{"detail": ...}` envelope when present.
async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or(body);
    ApiError::Api { status, detail }
}
