use dioxus::prelude::*;

use crate::routes::Route;
use crate::stores::config_store;

#[component]
pub fn Home() -> Element {
    let username = config_store::CONFIG.read().github.username.clone();

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12 space-y-6",
            h1 {
                class: "text-4xl font-bold",
                "Welcome"
            }
            p {
                class: "text-muted-foreground",
                "This page shows a public GitHub profile, fetched live from the GitHub REST API."
            }
            Link {
                to: Route::Github {},
                class: "inline-block px-6 py-3 bg-gray-700 hover:bg-gray-800 text-white font-bold rounded-full transition",
                "See @{username} on GitHub"
            }
        }
    }
}
