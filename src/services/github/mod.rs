//! GitHub users API
//!
//! Fetches a single public profile from `/users/{username}`.

pub mod client;
pub mod types;


pub use client::{load_profile, GithubClient};
pub use types::{GithubConfig, GithubError, GithubProfile};
