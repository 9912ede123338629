use serde::{Deserialize, Serialize};

/// GitHub API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// User shown on `/github` when no override is stored
pub const DEFAULT_USERNAME: &str = "anuj8553";

/// Request timeout for native builds (the browser fetch has none)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Public fields of a GitHub user as returned by `/users/{username}`
///
/// Only `followers` and `avatar_url` are required. Everything else GitHub
/// sends is optional or ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GithubProfile {
    pub followers: u64,
    pub avatar_url: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub following: Option<u64>,
    #[serde(default)]
    pub public_repos: Option<u64>,
}

impl GithubProfile {
    /// Name to show next to the avatar: display name, then login
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.login.as_deref())
    }
}

/// Error body GitHub sends with 4xx/5xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GithubApiError {
    pub message: String,
}

impl GithubApiError {
    pub fn is_rate_limit(&self) -> bool {
        self.message.to_lowercase().contains("rate limit")
    }
}

/// Where and whom to fetch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GithubConfig {
    pub api_base: String,
    pub username: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GithubConfig {
    /// Same endpoint, different user
    pub fn with_username(&self, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..self.clone()
        }
    }
}

/// Why a profile could not be loaded
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GithubError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimited { message: String },
    #[error("GitHub user '{username}' not found")]
    NotFound { username: String },
    #[error("GitHub returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response body: {0}")]
    Decode(String),
    #[error("Response is not a GitHub profile: {0}")]
    InvalidProfile(String),
}

impl GithubError {
    /// Worth trying again later without changing anything
    pub fn is_transient(&self) -> bool {
        match self {
            GithubError::Network(_) | GithubError::RateLimited { .. } => true,
            GithubError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_ignores_unknown_fields() {
        let body = serde_json::json!({
            "login": "octocat",
            "id": 583231,
            "followers": 42,
            "avatar_url": "https://example.com/a.png",
            "site_admin": false
        });
        let profile: GithubProfile = serde_json::from_value(body).unwrap();
        assert_eq!(profile.followers, 42);
        assert_eq!(profile.avatar_url, "https://example.com/a.png");
        assert_eq!(profile.login.as_deref(), Some("octocat"));
        assert_eq!(profile.name, None);
    }

    #[test]
    fn test_profile_requires_followers_and_avatar() {
        let err = serde_json::from_value::<GithubProfile>(serde_json::json!({}));
        assert!(err.is_err());

        let err = serde_json::from_value::<GithubProfile>(serde_json::json!({ "followers": 1 }));
        assert!(err.is_err());
    }

    #[test]
    fn test_display_name_prefers_name() {
        let mut profile = GithubProfile {
            followers: 0,
            avatar_url: String::new(),
            login: Some("octocat".to_string()),
            name: Some("The Octocat".to_string()),
            html_url: None,
            following: None,
            public_repos: None,
        };
        assert_eq!(profile.display_name(), Some("The Octocat"));

        profile.name = Some("  ".to_string());
        assert_eq!(profile.display_name(), Some("octocat"));

        profile.login = None;
        assert_eq!(profile.display_name(), None);
    }

    #[test]
    fn test_rate_limit_detection() {
        let body = GithubApiError {
            message: "API rate limit exceeded for 1.2.3.4.".to_string(),
        };
        assert!(body.is_rate_limit());

        let body = GithubApiError {
            message: "Not Found".to_string(),
        };
        assert!(!body.is_rate_limit());
    }

    #[test]
    fn test_config_with_username_keeps_base() {
        let config = GithubConfig {
            api_base: "http://localhost:1234".to_string(),
            ..GithubConfig::default()
        };
        let other = config.with_username("octocat");
        assert_eq!(other.api_base, "http://localhost:1234");
        assert_eq!(other.username, "octocat");
        assert_eq!(config.username, DEFAULT_USERNAME);
    }

    #[test]
    fn test_transient_errors() {
        assert!(GithubError::Network("refused".to_string()).is_transient());
        assert!(GithubError::Status { status: 502, message: "Bad Gateway".to_string() }.is_transient());
        assert!(!GithubError::NotFound { username: "x".to_string() }.is_transient());
        assert!(!GithubError::InvalidProfile("missing field".to_string()).is_transient());
    }
}
