use dioxus::prelude::*;
use nova_types::Project;

use crate::shell::catalog::EXPORTED_FILES;
use crate::shell::components::{BackButton, Button, Icon, IconName};
use crate::shell::state::Page;

#[component]
pub fn DownloadScreen(project: Project, on_navigate: Callback<Page>) -> Element {
    rsx! {
        div {
            class: "page",
            "data-testid": "download",
            BackButton { on_navigate }
            div {
                class: "page-narrow",
                div {
                    style: "display: flex; justify-content: center; margin-bottom: 1.5rem;",
                    Icon { name: IconName::Download, size: "4rem", color: "var(--success-text)" }
                }
                h1 { style: "margin: 0 0 1rem; font-size: 2.25rem;", "Downloads for {project.name}" }
                p {
                    style: "margin: 0 0 2rem; font-size: 1.125rem; color: var(--text-secondary);",
                    "Your clips are ready. Click to download."
                }
                div {
                    class: "card",
                    style: "padding: 2rem; display: flex; flex-direction: column; gap: 1rem;",
                    for file in EXPORTED_FILES.iter().copied() {
                        div {
                            key: "{file}",
                            class: "download-row",
                            p { style: "margin: 0;", "{file}" }
                            Button { "Download" }
                        }
                    }
                }
            }
        }
    }
}
