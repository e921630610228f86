use dioxus::prelude::*;

use crate::shell::state::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();
    let kind = if submit { "submit" } else { "button" };

    rsx! {
        button {
            class: "{base} {class}",
            r#type: kind,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Secondary button returning to the dashboard.
#[component]
pub fn BackButton(
    on_navigate: Callback<Page>,
    #[props(default = "Back".to_string())] label: String,
) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_| on_navigate.call(Page::Dashboard),
            "← {label}"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Upload,
    Magic,
    Download,
    Video,
    Logout,
}

impl IconName {
    fn path(self) -> &'static str {
        match self {
            IconName::Upload => "M12 16.5V9.75m0 0l-3.75 3.75M12 9.75l3.75 3.75M17.25 12c0 2.895-2.355 5.25-5.25 5.25S6.75 14.895 6.75 12 9.105 6.75 12 6.75s5.25 2.355 5.25 5.25z",
            IconName::Magic => "M9.53 16.122a3 3 0 00-5.78 1.128 2.25 2.25 0 01-2.4 2.245 4.5 4.5 0 008.4-2.245c0-.399-.078-.78-.22-1.128zm0 0a15.998 15.998 0 003.388-1.62m-5.043-.025a15.998 15.998 0 011.622-3.385m5.043.025a15.998 15.998 0 001.622-3.385m3.388 1.62a15.998 15.998 0 00-1.622-3.385m-5.043-.025a15.998 15.998 0 01-3.388-1.621m-1.622 3.385a15.998 15.998 0 01-1.622-3.385m1.622 3.385a15.998 15.998 0 003.388 1.622m-3.388-1.622a15.998 15.998 0 013.388 1.622m0 0a15.998 15.998 0 003.388-1.622m-3.388 1.622a15.998 15.998 0 01-3.388-1.622m5.043.025a15.998 15.998 0 00-1.622-3.385",
            IconName::Download => "M3 16.5v2.25A2.25 2.25 0 005.25 21h13.5A2.25 2.25 0 0021 18.75V16.5M16.5 12L12 16.5m0 0L7.5 12m4.5 4.5V3",
            IconName::Video => "M15.75 10.5l4.72-4.72a.75.75 0 011.28.53v11.38a.75.75 0 01-1.28.53l-4.72-4.72M4.5 18.75h9a2.25 2.25 0 002.25-2.25v-9A2.25 2.25 0 0013.5 5.25h-9A2.25 2.25 0 002.25 7.5v9A2.25 2.25 0 004.5 18.75z",
            IconName::Logout => "M15.75 9V5.25A2.25 2.25 0 0013.5 3h-6a2.25 2.25 0 00-2.25 2.25v13.5A2.25 2.25 0 007.5 21h6a2.25 2.25 0 002.25-2.25V15m3 0l3-3m0 0l-3-3m3 3H9",
        }
    }
}

#[component]
pub fn Icon(
    name: IconName,
    #[props(default = "1.5rem".to_string())] size: String,
    #[props(default)] color: Option<String>,
) -> Element {
    let color = color.unwrap_or_else(|| "currentColor".to_string());
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "{color}",
            width: "{size}",
            height: "{size}",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: name.path(),
            }
        }
    }
}

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        div {
            "data-testid": "loading",
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; color: var(--text-secondary);",
            "Loading..."
        }
    }
}
