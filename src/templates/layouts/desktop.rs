use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(HTMX_SRC) defer {};
            }
            body {
                header class="site-header" {
                    h3 { "Seller Dashboard" }
                    nav {
                        ul {
                            li { a href="/dashboard" { "Dashboard" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
