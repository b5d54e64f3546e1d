use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Error,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Muted => "text-secondary",
            Tone::Error => "text-error",
        }
    }
}

pub fn card(body: Markup) -> Markup {
    html! {
        div class="card" {
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A card holding a single line of text.
pub fn notice_card(message: &str, tone: Tone) -> Markup {
    card(html! {
        p class=(tone.class()) { (message) }
    })
}
