use dioxus::prelude::*;

use crate::shell::components::{BackButton, Button, Icon, IconName};
use crate::shell::state::Page;

/// Upload placeholder. File intake is not wired to a backend yet.
#[component]
pub fn UploadScreen(
    title: String,
    description: String,
    icon: IconName,
    on_navigate: Callback<Page>,
) -> Element {
    rsx! {
        div {
            class: "page",
            "data-testid": "upload",
            BackButton { on_navigate }
            div {
                class: "page-narrow",
                div {
                    style: "display: flex; justify-content: center; margin-bottom: 1.5rem;",
                    Icon { name: icon, size: "4rem", color: "var(--accent-bg)" }
                }
                h1 { style: "margin: 0 0 1rem; font-size: 2.25rem;", "{title}" }
                p { style: "margin: 0 0 2rem; font-size: 1.125rem; color: var(--text-secondary);", "{description}" }
                div {
                    class: "card",
                    style: "padding: 2.5rem;",
                    div {
                        class: "drop-zone",
                        Icon { name: IconName::Upload, size: "3rem", color: "var(--text-muted)" }
                        p { style: "margin: 1rem 0; color: var(--text-secondary);", "Drag & drop your file here" }
                        p { style: "margin: 0 0 1rem; font-size: 0.875rem; color: var(--text-muted);", "or" }
                        Button { "Browse Files" }
                    }
                }
            }
        }
    }
}
