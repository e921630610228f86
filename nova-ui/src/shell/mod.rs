//! App shell: session gate and page switch.
//!
//! Owns the single `AppState` signal. The session controller feeds it
//! gateway notifications; screens only reach it through the navigation
//! callbacks handed down as props.

pub mod catalog;
pub mod components;
pub mod state;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use nova_types::{Identity, Project};

use crate::auth::{AuthScreen, GatewayHandle};
use crate::screens::{AiCreationScreen, Dashboard, DownloadScreen, Editor, UploadScreen};
use crate::session::SessionController;
use catalog::seed_projects;
use components::{IconName, LoadingState};
use state::{AppState, Page, View};
use theme::STYLES;

#[component]
pub fn AppShell() -> Element {
    let gateway = use_context::<GatewayHandle>();
    let mut app = use_context_provider(|| Signal::new(AppState::default()));
    let controller = use_hook(|| Rc::new(RefCell::new(None::<SessionController>)));

    {
        let controller = controller.clone();
        use_drop(move || {
            if let Some(mut controller) = controller.borrow_mut().take() {
                controller.close();
            }
        });
    }

    // Subscribe once; every notification replaces the session in `app`.
    {
        let controller = controller.clone();
        let gateway = gateway.clone();
        use_effect(move || {
            if controller.borrow().is_some() {
                return;
            }
            let gateway = gateway.get();
            let started = SessionController::start(gateway.as_deref(), move |identity| {
                app.write().apply_session(identity);
            });
            *controller.borrow_mut() = Some(started);

            if let Some(gateway) = gateway {
                spawn(async move {
                    if let Err(e) = gateway.resume().await {
                        dioxus_logger::tracing::warn!("Stored session was not restored: {}", e);
                    }
                });
            }
        });
    }

    let navigate = use_callback(move |page: Page| {
        app.write().navigate(page);
    });

    let select_project = use_callback(move |project: Project| {
        app.write().select_project(project);
    });

    let sign_out = use_callback(move |_: ()| {
        let Some(gateway) = gateway.get() else {
            return;
        };
        spawn(async move {
            if let Err(e) = gateway.sign_out().await {
                dioxus_logger::tracing::warn!("Sign out failed: {}", e);
            }
        });
    });

    let body = match app.read().view() {
        View::Loading => rsx! { LoadingState {} },
        View::AuthGate => rsx! { AuthScreen {} },
        View::Main { identity, page } => rsx! {
            MainApp {
                identity,
                page,
                on_navigate: navigate,
                on_select_project: select_project,
                on_sign_out: sign_out,
            }
        },
    };

    rsx! {
        style { {STYLES} }
        {body}
    }
}

#[component]
pub fn MainApp(
    identity: Identity,
    page: Page,
    on_navigate: Callback<Page>,
    on_select_project: Callback<Project>,
    on_sign_out: Callback<()>,
) -> Element {
    let projects = use_hook(seed_projects);

    let content = match page {
        Page::Dashboard => rsx! {
            Dashboard {
                identity,
                projects,
                on_navigate,
                on_select_project,
                on_sign_out,
            }
        },
        Page::Editor(project) => rsx! { Editor { project, on_navigate } },
        Page::Download(project) => rsx! { DownloadScreen { project, on_navigate } },
        Page::RepurposeUpload => rsx! {
            UploadScreen {
                title: "Repurpose Video",
                description: "Upload your long-form video to get started.",
                icon: IconName::Video,
                on_navigate,
            }
        },
        Page::AiCreation => rsx! { AiCreationScreen { on_navigate } },
    };

    rsx! {
        div { class: "main-app", {content} }
    }
}
