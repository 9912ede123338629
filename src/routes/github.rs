use dioxus::prelude::*;

use crate::components::GithubCard;
use crate::hooks::use_github_profile;
use crate::routes::Route;
use crate::stores::config_store;

/// Profile of the configured user
#[component]
pub fn Github() -> Element {
    let username = config_store::CONFIG.read().github.username.clone();
    let state = use_github_profile(username.clone());

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 py-8",
            h1 {
                class: "text-2xl font-bold text-center",
                "@{username}"
            }
            GithubCard { state }
            UserLookup {}
        }
    }
}

/// Outcome of "make default", tagged with the user it was for
type SaveOutcome = (String, Result<(), String>);

/// Profile of any user, from the URL
#[component]
pub fn GithubUser(username: String) -> Element {
    let username = route_username(&username);
    let state = use_github_profile(username.clone());
    let mut saved = use_signal(|| None::<SaveOutcome>);
    let is_default = config_store::CONFIG.read().github.username == username;

    let username_for_save = username.clone();
    let handle_make_default = move |_: MouseEvent| {
        let result = config_store::set_username(&username_for_save);
        if let Err(e) = &result {
            log::error!("Failed to save default user: {}", e);
        }
        saved.set(Some((username_for_save.clone(), result)));
    };

    // The component is reused across /github/:username visits
    let save_message = save_outcome_for(saved.read().as_ref(), &username).cloned();

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 py-8",
            h1 {
                class: "text-2xl font-bold text-center",
                "@{username}"
            }
            GithubCard { state: state.clone() }

            if state.is_loaded() && !is_default {
                div {
                    class: "text-center",
                    button {
                        class: "px-4 py-2 rounded-full border border-border hover:bg-accent transition text-sm",
                        onclick: handle_make_default,
                        "Show this user on /github"
                    }
                }
            }
            {match save_message {
                Some(Ok(())) => rsx! {
                    p { class: "text-center text-sm text-green-600 mt-2", "Saved." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "text-center text-sm text-red-500 mt-2", "{e}" }
                },
                None => rsx! {},
            }}

            UserLookup {}
        }
    }
}

/// Username from the URL, cleaned up the same way typed input is
fn route_username(raw: &str) -> String {
    config_store::normalize_username(raw).unwrap_or_else(|| raw.trim().to_string())
}

/// Save result, only if it belongs to the user on screen
fn save_outcome_for<'a>(saved: Option<&'a SaveOutcome>, username: &str) -> Option<&'a Result<(), String>> {
    saved
        .filter(|(saved_for, _)| saved_for == username)
        .map(|(_, result)| result)
}

/// Text box that jumps to another user's profile
#[component]
fn UserLookup() -> Element {
    let mut query = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let navigator = navigator();

    let mut go = move || {
        let input = query.read().clone();
        match config_store::normalize_username(&input) {
            Some(username) => {
                error.set(None);
                query.set(String::new());
                navigator.push(Route::GithubUser { username });
            }
            None => error.set(Some(format!("\"{}\" is not a valid GitHub username", input.trim()))),
        }
    };

    rsx! {
        div {
            class: "max-w-md mx-auto mt-8",
            div {
                class: "flex gap-2",
                input {
                    r#type: "text",
                    class: "flex-1 px-3 py-2 bg-input border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                    placeholder: "Look up a GitHub user...",
                    value: "{query.read()}",
                    oninput: move |e| query.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            go();
                        }
                    },
                }
                button {
                    class: "px-4 py-2 bg-gray-700 hover:bg-gray-800 text-white rounded-lg transition",
                    onclick: move |_| go(),
                    "View"
                }
            }
            if let Some(e) = error.read().as_ref() {
                p { class: "text-sm text-red-500 mt-2", "{e}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_username_is_normalized() {
        assert_eq!(route_username("@octocat"), "octocat");
        assert_eq!(route_username(" octocat "), "octocat");
        assert_eq!(route_username("anuj8553"), "anuj8553");
    }

    #[test]
    fn test_route_username_keeps_invalid_input() {
        assert_eq!(route_username("not valid"), "not valid");
    }

    #[test]
    fn test_save_outcome_shown_for_same_user() {
        let saved: SaveOutcome = ("alice".to_string(), Ok(()));
        assert_eq!(save_outcome_for(Some(&saved), "alice"), Some(&Ok(())));
    }

    #[test]
    fn test_save_outcome_hidden_after_switching_user() {
        let saved: SaveOutcome = ("alice".to_string(), Ok(()));
        assert_eq!(save_outcome_for(Some(&saved), "bob"), None);

        let failed: SaveOutcome = ("alice".to_string(), Err("Failed to save username".to_string()));
        assert_eq!(save_outcome_for(Some(&failed), "bob"), None);
        assert_eq!(save_outcome_for(None, "alice"), None);
    }
}
