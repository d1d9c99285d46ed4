use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 0 auto; padding: 1rem; }
header { display: flex; align-items: center; justify-content: space-between; border-bottom: 1px solid #ddd; padding-bottom: 0.5rem; }
nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.house-card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
.house-card h2 { margin-top: 0; }
.house-details dt { font-weight: 600; }
.messages time { color: #777; margin-right: 0.5rem; }
"#;

/// Fixed site chrome: header with navigation plus the routed content
/// region. Every page renders through here.
pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(BASE_CSS)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                header {
                    h3 { "Lenders Marketplace" }
                    nav {
                        ul {
                            li { a href="/" { "Marketplace" } }
                            li { a href="/houses/new" { "Add a house" } }
                            li { a href="/messages" { "Messages" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
