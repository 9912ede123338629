use dioxus::prelude::*;

pub mod github;
pub mod home;
pub mod not_found;

use crate::components::{Footer, Header};
use github::{Github, GithubUser};
use home::Home;
use not_found::NotFound;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/github")]
        Github {},

        #[route("/github/:username")]
        GithubUser { username: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Header, routed page, footer
#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-background transition-colors",
            Header {}

            // Page Content
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;
    use std::str::FromStr;

    #[test]
    fn test_github_routes_parse() {
        assert_eq!(Route::from_str("/github").ok(), Some(Route::Github {}));
        assert_eq!(
            Route::from_str("/github/octocat").ok(),
            Some(Route::GithubUser { username: "octocat".to_string() })
        );
    }

    #[test]
    fn test_unknown_path_falls_through() {
        let route = Route::from_str("/no/such/page").ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }

    /// Root that mounts the router at `path` with in-memory history
    fn app_at(path: String) -> Element {
        use_context_provider(|| Rc::new(MemoryHistory::with_initial_path(path.clone())) as Rc<dyn History>);
        rsx! { Router::<Route> {} }
    }

    fn render_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(app_at, path.to_string());
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle).unwrap_or_else(|| panic!("{:?} not found in {}", needle, html))
    }

    #[test]
    fn test_layout_wraps_page_in_header_and_footer() {
        let html = render_at("/");

        let header = position(&html, "<header");
        let page = position(&html, "Welcome");
        let footer = position(&html, "<footer");

        assert!(header < page, "{}", html);
        assert!(page < footer, "{}", html);
        assert!(html.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_layout_renders_fallback_page() {
        let html = render_at("/no/such/page");

        let header = position(&html, "<header");
        let page = position(&html, "Page not found");
        let footer = position(&html, "<footer");

        assert!(header < page && page < footer, "{}", html);
    }

    /// First render of a profile route shows the card in its loading state
    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_github_route_starts_loading() {
        let html = render_at("/github/octocat");

        let header = position(&html, "<header");
        let title = position(&html, "@octocat");
        let card = position(&html, "Loading GitHub profile");
        let footer = position(&html, "<footer");

        assert!(header < title && title < card && card < footer, "{}", html);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::GithubUser { username: "octocat".to_string() }.to_string(), "/github/octocat");
        assert_eq!(Route::Github {}.to_string(), "/github");
    }
}
