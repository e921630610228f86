use dioxus::prelude::*;
use nova_types::{Identity, Project, ProjectStatus};

use crate::shell::components::{Button, ButtonVariant, Icon, IconName};
use crate::shell::state::Page;

pub fn status_badge_style(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::ReadyToReview => {
            "background: var(--badge-review-bg); color: var(--badge-review-text);"
        }
        ProjectStatus::Processing => {
            "background: var(--badge-processing-bg); color: var(--badge-processing-text);"
        }
        ProjectStatus::Exported => {
            "background: var(--badge-exported-bg); color: var(--badge-exported-text);"
        }
    }
}

#[component]
pub fn Dashboard(
    identity: Identity,
    projects: Vec<Project>,
    on_navigate: Callback<Page>,
    on_select_project: Callback<Project>,
    on_sign_out: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "page",
            "data-testid": "dashboard",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem;",
                h1 { style: "margin: 0; font-size: 1.875rem;", "Dashboard" }
                div {
                    style: "display: flex; align-items: center; gap: 1rem;",
                    p { class: "hide-mobile", style: "margin: 0; color: var(--text-secondary);", "{identity.email}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_sign_out.call(()),
                        Icon { name: IconName::Logout, size: "1.25rem" }
                        span { class: "hide-mobile", "Sign Out" }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem;",
                EntryCard {
                    icon: IconName::Video,
                    color: "var(--accent-bg)",
                    title: "Repurpose Video",
                    description: "Upload a long-form video and find viral clips.",
                    onclick: move |_| on_navigate.call(Page::RepurposeUpload),
                }
                EntryCard {
                    icon: IconName::Magic,
                    color: "var(--magic)",
                    title: "Create with AI",
                    description: "Generate a new video with AI avatars and voiceovers.",
                    onclick: move |_| on_navigate.call(Page::AiCreation),
                }
            }

            h2 { style: "margin: 3rem 0 1.5rem; font-size: 1.5rem;", "My Projects" }
            div {
                class: "card",
                ul {
                    style: "list-style: none; margin: 0; padding: 0;",
                    for project in projects {
                        ProjectRow {
                            key: "{project.id}",
                            project: project.clone(),
                            on_select: on_select_project,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EntryCard(
    icon: IconName,
    color: String,
    title: String,
    description: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            class: "card entry-card",
            onclick: move |evt| onclick.call(evt),
            div {
                style: "margin-bottom: 1rem;",
                Icon { name: icon, size: "3rem", color }
            }
            h2 { style: "margin: 0; font-size: 1.25rem;", "{title}" }
            p { style: "margin: 0.5rem 0 0; color: var(--text-secondary);", "{description}" }
        }
    }
}

#[component]
fn ProjectRow(project: Project, on_select: Callback<Project>) -> Element {
    let badge_style = status_badge_style(project.status);
    let created = project.created_label();
    let name = project.name.clone();
    let status = project.status.label();

    rsx! {
        li {
            class: "project-row",
            onclick: move |_| on_select.call(project.clone()),
            div {
                p { style: "margin: 0; font-weight: 600;", "{name}" }
                p { style: "margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--text-secondary);", "Created: {created}" }
            }
            span { class: "badge", style: badge_style, "{status}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_badge() {
        let styles = [
            status_badge_style(ProjectStatus::ReadyToReview),
            status_badge_style(ProjectStatus::Processing),
            status_badge_style(ProjectStatus::Exported),
        ];
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert!(styles[2].contains("exported"));
    }
}
