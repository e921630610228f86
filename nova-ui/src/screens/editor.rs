//! Clip editor.
//!
//! A project without clips is still being analyzed and only gets the
//! waiting view. Clip selection state lives in `ClipWorkbench`, so it is
//! never created for such a project.

use std::collections::HashMap;

use dioxus::prelude::*;
use nova_types::{Clip, Project, ProjectId};

use crate::shell::components::{BackButton, Button, Icon, IconName};
use crate::shell::state::Page;

/// A clip picked by the user, remembered together with its project so a
/// project switch falls back to that project's first clip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipSelection {
    project_id: ProjectId,
    clip_id: String,
}

impl ClipSelection {
    pub fn new(project: &Project, clip: &Clip) -> Self {
        Self {
            project_id: project.id,
            clip_id: clip.id.clone(),
        }
    }

    pub fn resolve<'a>(picked: Option<&ClipSelection>, project: &'a Project) -> Option<&'a Clip> {
        picked
            .filter(|selection| selection.project_id == project.id)
            .and_then(|selection| project.clip(&selection.clip_id))
            .or_else(|| project.clips.first())
    }
}

/// Unsaved caption edits, keyed by project and clip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptionDrafts(HashMap<(ProjectId, String), String>);

impl CaptionDrafts {
    pub fn text_for(&self, project_id: ProjectId, clip: &Clip) -> String {
        self.0
            .get(&(project_id, clip.id.clone()))
            .cloned()
            .unwrap_or_else(|| clip.text.clone())
    }

    pub fn update(&mut self, project_id: ProjectId, clip_id: &str, text: String) {
        self.0.insert((project_id, clip_id.to_string()), text);
    }
}

#[component]
pub fn Editor(project: Project, on_navigate: Callback<Page>) -> Element {
    if !project.has_clips() {
        return rsx! { ProcessingState { on_navigate } };
    }
    rsx! { ClipWorkbench { project, on_navigate } }
}

#[component]
fn ProcessingState(on_navigate: Callback<Page>) -> Element {
    rsx! {
        div {
            class: "page",
            "data-testid": "editor-processing",
            BackButton { on_navigate, label: "Back to Dashboard" }
            div {
                style: "text-align: center; margin-top: 5rem;",
                h2 { style: "margin: 0; font-size: 1.5rem; color: var(--text-secondary);", "Project is processing..." }
                p {
                    style: "margin-top: 0.5rem; color: var(--text-muted);",
                    "AI-suggested clips will appear here once the video has been analyzed."
                }
            }
        }
    }
}

#[component]
fn ClipWorkbench(project: Project, on_navigate: Callback<Page>) -> Element {
    let mut picked = use_signal(|| None::<ClipSelection>);
    let mut drafts = use_signal(CaptionDrafts::default);

    let Some(selected) = ClipSelection::resolve(picked.read().as_ref(), &project).cloned() else {
        return rsx! { ProcessingState { on_navigate } };
    };

    let project_id = project.id;
    let caption = drafts.read().text_for(project_id, &selected);
    let clip_count = project.clips.len();
    let selected_id = selected.id.clone();

    rsx! {
        div {
            style: "height: 100vh; display: flex; flex-direction: column;",
            "data-testid": "editor",

            header {
                style: "padding: 1rem; border-bottom: 1px solid var(--border-color); display: flex; justify-content: space-between; align-items: center; background: var(--bg-secondary);",
                BackButton { on_navigate, label: "Back to Dashboard" }
                h2 { style: "margin: 0; font-size: 1.25rem;", "{project.name}" }
                Button {
                    Icon { name: IconName::Download }
                    "Export {clip_count} Clips"
                }
            }

            main {
                style: "flex: 1; display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; padding: 1.5rem; overflow: hidden;",
                div {
                    style: "display: flex; flex-direction: column; gap: 1rem;",
                    div {
                        style: "background: #000; border-radius: var(--radius-md); aspect-ratio: 16 / 9; display: flex; align-items: center; justify-content: center; padding: 1rem;",
                        p { style: "color: #fff; text-align: center;", "Video Preview for \"{selected.text}\"" }
                    }
                    div {
                        class: "card",
                        style: "padding: 1rem;",
                        h3 { style: "margin: 0 0 0.5rem;", "Edit Captions" }
                        textarea {
                            class: "input",
                            style: "height: 6rem; resize: vertical;",
                            value: "{caption}",
                            oninput: move |e| drafts.write().update(project_id, &selected_id, e.value()),
                        }
                    }
                }

                div {
                    class: "card",
                    style: "padding: 1rem; overflow-y: auto;",
                    h3 { style: "margin: 0 0 1rem;", "AI-Suggested Clips" }
                    ul {
                        style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                        for (clip, timestamp) in project.clips.iter().cloned().map(|c| {
                            let timestamp = c.timestamp_label();
                            (c, timestamp)
                        }) {
                            li {
                                key: "{clip.id}",
                                class: if clip.id == selected.id { "clip-item selected" } else { "clip-item" },
                                onclick: {
                                    let selection = ClipSelection::new(&project, &clip);
                                    move |_| picked.set(Some(selection.clone()))
                                },
                                p { class: "truncate", style: "margin: 0; font-size: 0.875rem;", "{clip.text}" }
                                p {
                                    style: "margin: 0.25rem 0 0; font-size: 0.75rem; color: var(--text-secondary);",
                                    "Timestamp: {timestamp}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
