use anyhow::Context;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the ShopDesk API, e.g. `http://localhost:8000`.
    /// Set via SHOPDESK_API_URL.
    pub api_url: String,
    /// Total per-request timeout in seconds. Default: 30.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds. Default: 5.
    pub connect_timeout_secs: u64,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    let api_url =
        std::env::var("SHOPDESK_API_URL").unwrap_or_else(|_| "http://localhost:8000".into());
    Url::parse(&api_url).with_context(|| format!("SHOPDESK_API_URL is not a valid URL: {api_url}"))?;

    Ok(Config {
        api_url,
        request_timeout_secs: std::env::var("SHOPDESK_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30),
        connect_timeout_secs: std::env::var("SHOPDESK_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5),
    })
}
