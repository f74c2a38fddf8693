use crate::client::{ApiClient, LOGIN_PATH, LOGOUT_PATH, ME_PATH};
use crate::errors::ApiError;
use crate::models::user::{LoginRequest, TokenResponse, User};

/// Exchange credentials for a token pair. Storing the pair is the
/// caller's job (see [`Session::login`](crate::session::Session::login)).
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
    client.post(LOGIN_PATH, credentials).await
}

/// Invalidate the session server-side.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.post_unit(LOGOUT_PATH).await
}

/// Resolve the identity behind the current access token.
pub async fn me(client: &ApiClient) -> Result<User, ApiError> {
    client.get(ME_PATH).await
}
