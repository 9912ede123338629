use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12 text-center space-y-4",
            h1 {
                class: "text-3xl font-bold",
                "Page not found"
            }
            p {
                class: "text-muted-foreground",
                "Nothing lives at /{path}"
            }
            Link {
                to: Route::Home {},
                class: "hover:underline",
                "Back home"
            }
        }
    }
}
