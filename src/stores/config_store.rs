use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::services::github::GithubConfig;

/// Runtime configuration for the page
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub github: GithubConfig,
}

/// Global config state, read from localStorage on first access
pub static CONFIG: GlobalSignal<AppConfig> = Signal::global(load_config);

#[cfg(target_arch = "wasm32")]
const USERNAME_KEY: &str = "github_profile_username";

/// GitHub caps usernames at 39 characters
const MAX_USERNAME_LEN: usize = 39;

/// Defaults plus the username override from localStorage, if any
fn load_config() -> AppConfig {
    let mut config = AppConfig::default();

    match stored_username() {
        Some(username) => {
            log::info!("Loaded GitHub username from storage: {}", username);
            config.github.username = username;
        }
        None => {
            log::info!("Using default GitHub user: {}", config.github.username);
        }
    }

    config
}

#[cfg(target_arch = "wasm32")]
fn stored_username() -> Option<String> {
    let stored = LocalStorage::get::<String>(USERNAME_KEY).ok()?;
    let username = normalize_username(&stored);
    if username.is_none() {
        log::warn!("Ignoring invalid stored GitHub username: {:?}", stored);
        LocalStorage::delete(USERNAME_KEY);
    }
    username
}

#[cfg(target_arch = "wasm32")]
fn persist_username(username: &str) -> Result<(), String> {
    LocalStorage::set(USERNAME_KEY, username).map_err(|e| format!("Failed to save username: {}", e))
}

// No browser storage outside wasm (server-side rendering, tests)
#[cfg(not(target_arch = "wasm32"))]
fn stored_username() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_username(_username: &str) -> Result<(), String> {
    Ok(())
}

/// Current GitHub endpoint and user
pub fn github_config() -> GithubConfig {
    CONFIG.read().github.clone()
}

/// Make `username` the user shown on `/github` and persist it
pub fn set_username(username: &str) -> Result<(), String> {
    let username = normalize_username(username)
        .ok_or_else(|| format!("Invalid GitHub username: {}", username))?;

    persist_username(&username)?;

    log::info!("Default GitHub user set to {}", username);
    CONFIG.write().github.username = username;
    Ok(())
}

/// Trim and check a GitHub username
///
/// Alphanumerics and single hyphens, no leading or trailing hyphen.
pub fn normalize_username(input: &str) -> Option<String> {
    let username = input.trim().trim_start_matches('@');

    if username.is_empty() || username.len() > MAX_USERNAME_LEN {
        return None;
    }
    if username.starts_with('-') || username.ends_with('-') || username.contains("--") {
        return None;
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }

    Some(username.to_string())
}
