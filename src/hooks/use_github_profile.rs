use dioxus::prelude::*;

use crate::services::github::{load_profile, GithubError, GithubProfile};
use crate::stores::config_store;
use crate::utils::LoadState;

/// Hook to load a GitHub profile for the current route
///
/// Re-runs whenever `username` changes. A superseded request is dropped by
/// `use_resource`, so a slow response never lands on a newer page.
pub fn use_github_profile(username: String) -> LoadState<GithubProfile, GithubError> {
    let profile = use_resource(use_reactive!(|(username,)| {
        let config = config_store::github_config().with_username(username);
        async move { load_profile(config).await }
    }));

    LoadState::from_resource(profile.read_unchecked().as_ref())
}
