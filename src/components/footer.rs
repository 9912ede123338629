use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "border-t border-border mt-auto",
            div {
                class: "max-w-4xl mx-auto px-4 py-6 text-xs text-muted-foreground flex flex-wrap gap-2",
                a {
                    href: "/",
                    class: "hover:underline",
                    "Home"
                }
                span { "·" }
                a {
                    href: "/github",
                    class: "hover:underline",
                    "GitHub"
                }
                span { "·" }
                a {
                    href: "https://docs.github.com/rest/users/users",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "hover:underline",
                    "GitHub API"
                }
                div {
                    class: "w-full mt-1",
                    "gitprofile - {env!(\"CARGO_PKG_VERSION\")}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_shows_version() {
        let html = dioxus_ssr::render_element(rsx! { Footer {} });
        assert!(html.contains(env!("CARGO_PKG_VERSION")));
        assert!(html.contains("href=\"/github\""));
    }
}
