use dioxus::prelude::*;

use crate::services::github::{GithubError, GithubProfile};
use crate::utils::LoadState;

/// Width of the avatar image in pixels
const AVATAR_WIDTH: u32 = 300;

/// GitHub follower count and avatar
///
/// Pure view over a load result: no fetching happens here.
#[component]
pub fn GithubCard(state: LoadState<GithubProfile, GithubError>) -> Element {
    match state {
        LoadState::Loading => rsx! {
            div {
                class: "text-center m-4 bg-gray-600/40 p-4 rounded animate-pulse",
                div { class: "h-8 bg-muted rounded w-1/3 mx-auto mb-4" }
                div { class: "w-[300px] h-[300px] bg-muted rounded mx-auto" }
                span { class: "sr-only", "Loading GitHub profile..." }
            }
        },
        LoadState::Failed(err) => rsx! {
            div {
                class: "m-4 p-4 border rounded-lg bg-red-500/10 border-red-500/30 text-red-500",
                p { "Unable to load GitHub profile: {err}" }
                if err.is_transient() {
                    p {
                        class: "text-sm mt-2",
                        "Please try again in a few minutes."
                    }
                }
            }
        },
        LoadState::Loaded(profile) => rsx! {
            div {
                class: "text-center m-4 bg-gray-600 text-white p-4 text-3xl",
                "Github: {profile.followers}"
                img {
                    src: "{profile.avatar_url}",
                    alt: "Git Picture",
                    width: "{AVATAR_WIDTH}",
                    class: "mx-auto mt-4",
                }
                if let Some(url) = &profile.html_url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "block mt-4 text-base hover:underline",
                        if let Some(name) = profile.display_name() {
                            "{name}"
                        } else {
                            "View on GitHub"
                        }
                    }
                }
            }
        },
    }
}
