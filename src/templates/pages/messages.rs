use crate::messages::MessageEntry;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Diagnostics page over the message log, oldest first.
pub fn messages_page(entries: &[MessageEntry]) -> Markup {
    desktop_layout(
        "Messages",
        html! {
            main class="container" {
                h1 { "Messages" }
                @if entries.is_empty() {
                    p { "No messages yet." }
                } @else {
                    ul class="messages" {
                        @for entry in entries {
                            li {
                                time { (entry.at.format("%Y-%m-%d %H:%M:%S UTC")) }
                                (entry.text)
                            }
                        }
                    }
                }
            }
        },
    )
}
