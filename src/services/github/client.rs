use reqwest::{header, Client, Response, StatusCode};
use serde_json::Value;

use super::types::{GithubApiError, GithubConfig, GithubError, GithubProfile};

/// GitHub users API client
///
/// Every call issues exactly one GET. Nothing is cached or retried, so two
/// calls always mean two requests.
pub struct GithubClient {
    config: GithubConfig,
    http: Client,
}

/// Standalone helper: build a client and load its profile
pub async fn load_profile(config: GithubConfig) -> Result<GithubProfile, GithubError> {
    GithubClient::new(config)?.load().await
}

impl GithubClient {
    /// Create a client for the given endpoint and user
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let http = build_http_client(&config)?;
        Ok(Self { config, http })
    }

    /// `{api_base}/users/{username}`
    pub fn profile_url(&self) -> String {
        format!(
            "{}/users/{}",
            self.config.api_base.trim_end_matches('/'),
            urlencoding::encode(&self.config.username)
        )
    }

    /// Fetch the profile body as-is
    ///
    /// The status code is not inspected: a 403 rate-limit body comes back
    /// as `Ok` just like a real profile. Only transport failures and bodies
    /// that are not JSON produce an error.
    ///
    /// The page renders through [`GithubClient::load`]; this is kept for
    /// callers that want GitHub's body untouched, error payloads included.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn load_raw(&self) -> Result<Value, GithubError> {
        let response = self.send().await?;
        let status = response.status();
        let body = read_body(response).await?;

        if !status.is_success() {
            log::warn!("GitHub answered {} for {}, passing body through", status, self.config.username);
        }

        serde_json::from_slice(&body).map_err(|e| GithubError::Decode(e.to_string()))
    }

    /// Fetch and validate the profile
    ///
    /// Non-2xx responses are mapped to typed errors and 2xx bodies must
    /// carry `followers` and `avatar_url`.
    pub async fn load(&self) -> Result<GithubProfile, GithubError> {
        let response = self.send().await?;
        let status = response.status();
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false);
        let body = read_body(response).await?;

        if !status.is_success() {
            let err = classify_error(status, rate_limit_exhausted, &body, &self.config.username);
            log::warn!("GitHub profile request failed: {}", err);
            return Err(err);
        }

        let profile = parse_profile(&body)?;
        log::info!(
            "Loaded GitHub profile {} ({} followers)",
            profile.login.as_deref().unwrap_or(&self.config.username),
            profile.followers
        );
        Ok(profile)
    }

    async fn send(&self) -> Result<Response, GithubError> {
        let url = self.profile_url();
        log::info!("Fetching GitHub profile: {}", url);

        self.http
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                log::error!("GitHub request to {} failed: {}", url, e);
                GithubError::Network(e.to_string())
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &GithubConfig) -> Result<Client, GithubError> {
    // api.github.com rejects requests without a User-Agent
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| GithubError::Network(format!("Failed to create HTTP client: {}", e)))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &GithubConfig) -> Result<Client, GithubError> {
    Client::builder()
        .build()
        .map_err(|e| GithubError::Network(format!("Failed to create HTTP client: {}", e)))
}

async fn read_body(response: Response) -> Result<Vec<u8>, GithubError> {
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| GithubError::Network(format!("Failed to read response body: {}", e)))
}

/// Map a non-2xx response to an error
fn classify_error(status: StatusCode, rate_limit_exhausted: bool, body: &[u8], username: &str) -> GithubError {
    let api_error = serde_json::from_slice::<GithubApiError>(body).ok();
    let message = api_error
        .as_ref()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
    let says_rate_limit = api_error.as_ref().is_some_and(|e| e.is_rate_limit());

    match status.as_u16() {
        429 => GithubError::RateLimited { message },
        403 if rate_limit_exhausted || says_rate_limit => GithubError::RateLimited { message },
        404 => GithubError::NotFound { username: username.to_string() },
        code => GithubError::Status { status: code, message },
    }
}

/// Not JSON is a decode error, JSON of the wrong shape is an invalid profile
fn parse_profile(body: &[u8]) -> Result<GithubProfile, GithubError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| GithubError::Decode(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| GithubError::InvalidProfile(e.to_string()))
}
