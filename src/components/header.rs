use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Header() -> Element {
    let current_route = use_route::<Route>();
    let navigator = navigator();
    let is_home_page = matches!(current_route, Route::Home {});

    rsx! {
        header {
            class: "sticky top-0 z-40 bg-background border-b border-border",
            div {
                class: "max-w-4xl mx-auto flex items-center justify-between px-4 py-3",

                // Logo
                div {
                    class: "flex items-center gap-2 hover:opacity-80 transition cursor-pointer",
                    onclick: move |_| {
                        if is_home_page {
                            if let Some(window) = web_sys::window() {
                                let _ = window.scroll_to_with_x_and_y(0.0, 0.0);
                            }
                        } else {
                            navigator.push(Route::Home {});
                        }
                    },
                    div {
                        class: "w-10 h-10 bg-gray-700 rounded-full flex items-center justify-center text-white font-bold text-xl",
                        "G"
                    }
                    span {
                        class: "text-xl font-bold",
                        "gitprofile"
                    }
                }

                nav {
                    class: "flex items-center gap-2",
                    NavLink { to: Route::Home {}, label: "Home" }
                    NavLink { to: Route::Github {}, label: "GitHub" }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let current_route = use_route::<Route>();

    let is_active = match (&to, &current_route) {
        (Route::Home {}, Route::Home {}) => true,
        (Route::Github {}, Route::Github {} | Route::GithubUser { .. }) => true,
        _ => false,
    };

    let font_class = if is_active { "font-bold" } else { "" };

    rsx! {
        Link {
            to: to,
            class: "px-4 py-2 rounded-full hover:bg-accent transition {font_class}",
            "{label}"
        }
    }
}
