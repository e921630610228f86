//! Sign-in / sign-up screen and the identity provider seam behind it.
//!
//! The screen never touches the session itself. A successful submit makes
//! the gateway notify its subscribers, and the shell swaps this screen out.

pub mod error;
pub mod firebase;
pub mod form;
pub mod gateway;
pub mod local;
pub mod storage;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

pub use error::{AuthError, ConfigurationError, SubmitError};
pub use form::{AuthForm, AuthMode};
pub use gateway::{build_gateway, GatewayHandle, IdentityGateway, Subscription};

use crate::shell::components::Button;
use form::submit_credentials;

const EMAIL_INPUT_ID: &str = "auth-email";

#[component]
pub fn AuthScreen() -> Element {
    let gateway = use_context::<GatewayHandle>();
    let mut auth_form = use_signal(AuthForm::default);

    use_effect(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id(EMAIL_INPUT_ID) {
                let _ = el.dyn_ref::<web_sys::HtmlElement>().map(|e| e.focus());
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let gateway = gateway.get();
        if !auth_form.write().begin_submit() {
            return;
        }

        let (mode, email, password) = {
            let current = auth_form.read();
            (current.mode, current.email.clone(), current.password.clone())
        };

        spawn(async move {
            let result = submit_credentials(gateway.as_deref(), mode, &email, &password).await;
            auth_form.write().finish_submit(result);
        });
    };

    let snapshot = auth_form.read().clone();
    let title = snapshot.title();
    let submit_label = snapshot.submit_label();
    let toggle_label = snapshot.toggle_label();

    rsx! {
        div {
            class: "auth-page",
            "data-testid": "auth-screen",
            div {
                class: "card auth-card",
                h2 { class: "auth-title", "{title}" }

                form {
                    class: "auth-form",
                    onsubmit: on_submit,

                    label { r#for: EMAIL_INPUT_ID, class: "sr-only", "Email address" }
                    input {
                        id: EMAIL_INPUT_ID,
                        class: "input",
                        name: "email",
                        r#type: "email",
                        required: true,
                        placeholder: "Email address",
                        autocomplete: "email",
                        value: "{snapshot.email}",
                        oninput: move |e| auth_form.write().email = e.value(),
                    }

                    label { r#for: "auth-password", class: "sr-only", "Password" }
                    input {
                        id: "auth-password",
                        class: "input",
                        name: "password",
                        r#type: "password",
                        required: true,
                        placeholder: "Password",
                        autocomplete: if snapshot.mode == AuthMode::Login { "current-password" } else { "new-password" },
                        value: "{snapshot.password}",
                        oninput: move |e| auth_form.write().password = e.value(),
                    }

                    if let Some(err) = snapshot.error.as_deref() {
                        p {
                            class: "error-text",
                            "data-testid": "auth-error",
                            "{err}"
                        }
                    }

                    Button {
                        submit: true,
                        class: "w-full",
                        disabled: snapshot.in_flight,
                        "{submit_label}"
                    }
                }

                div {
                    style: "text-align: center; font-size: 0.875rem;",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| auth_form.write().toggle_mode(),
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}
