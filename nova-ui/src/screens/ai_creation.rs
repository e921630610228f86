//! Prompt form for generating a video from scratch.
//!
//! Generation has no backend; submitting only records the request in the log.

use std::fmt;

use dioxus::prelude::*;

use crate::shell::components::{BackButton, Button, Icon, IconName};
use crate::shell::state::Page;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Voice {
    #[default]
    FriendlyMale,
    ProfessionalFemale,
    CalmMale,
}

impl Voice {
    pub const ALL: [Voice; 3] = [Voice::FriendlyMale, Voice::ProfessionalFemale, Voice::CalmMale];

    pub fn label(self) -> &'static str {
        match self {
            Voice::FriendlyMale => "Friendly Male",
            Voice::ProfessionalFemale => "Professional Female",
            Voice::CalmMale => "Calm Male",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|voice| voice.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualStyle {
    #[default]
    MinimalistAnimation,
    StockFootageMontage,
    DigitalAvatar,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 3] = [
        VisualStyle::MinimalistAnimation,
        VisualStyle::StockFootageMontage,
        VisualStyle::DigitalAvatar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VisualStyle::MinimalistAnimation => "Minimalist Animation",
            VisualStyle::StockFootageMontage => "Stock Footage Montage",
            VisualStyle::DigitalAvatar => "Digital Avatar",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.label() == label)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreationRequest {
    pub prompt: String,
    pub voice: Voice,
    pub style: VisualStyle,
}

impl CreationRequest {
    pub fn is_ready(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

impl fmt::Display for CreationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({} chars)",
            self.voice.label(),
            self.style.label(),
            self.prompt.trim().chars().count()
        )
    }
}

#[component]
pub fn AiCreationScreen(on_navigate: Callback<Page>) -> Element {
    let mut request = use_signal(CreationRequest::default);
    let ready = request.read().is_ready();
    let prompt = request.read().prompt.clone();

    rsx! {
        div {
            class: "page",
            "data-testid": "ai-creation",
            BackButton { on_navigate }
            div {
                class: "page-narrow",
                style: "max-width: 48rem;",
                div {
                    style: "display: flex; justify-content: center; margin-bottom: 1.5rem;",
                    Icon { name: IconName::Magic, size: "4rem", color: "var(--magic)" }
                }
                h1 { style: "margin: 0 0 1rem; font-size: 2.25rem;", "Create with AI" }
                p {
                    style: "margin: 0 0 2rem; font-size: 1.125rem; color: var(--text-secondary);",
                    "Describe the video you want to create. The AI will generate a script, voiceover, and visuals."
                }
                div {
                    class: "card",
                    style: "padding: 2rem; text-align: left; display: flex; flex-direction: column; gap: 1rem;",
                    div {
                        label { r#for: "prompt", class: "field-label", "Your Prompt" }
                        textarea {
                            id: "prompt",
                            class: "input",
                            rows: "4",
                            placeholder: "e.g., A 30-second video about the benefits of remote work, with an upbeat and energetic tone.",
                            value: "{prompt}",
                            oninput: move |e| request.write().prompt = e.value(),
                        }
                    }
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1rem;",
                        div {
                            label { r#for: "voice", class: "field-label", "AI Voice" }
                            select {
                                id: "voice",
                                class: "input",
                                onchange: move |e| {
                                    if let Some(voice) = Voice::from_label(&e.value()) {
                                        request.write().voice = voice;
                                    }
                                },
                                for label in Voice::ALL.map(Voice::label) {
                                    option { key: "{label}", value: label, "{label}" }
                                }
                            }
                        }
                        div {
                            label { r#for: "style", class: "field-label", "Visual Style" }
                            select {
                                id: "style",
                                class: "input",
                                onchange: move |e| {
                                    if let Some(style) = VisualStyle::from_label(&e.value()) {
                                        request.write().style = style;
                                    }
                                },
                                for label in VisualStyle::ALL.map(VisualStyle::label) {
                                    option { key: "{label}", value: label, "{label}" }
                                }
                            }
                        }
                    }
                    Button {
                        class: "w-full",
                        disabled: !ready,
                        onclick: move |_| {
                            let request = request.read();
                            dioxus_logger::tracing::info!("Video generation requested: {}", request);
                        },
                        Icon { name: IconName::Magic }
                        "Generate Video"
                    }
                }
            }
        }
    }
}
