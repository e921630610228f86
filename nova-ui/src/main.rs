use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use nova_ui::auth::build_gateway;
use nova_ui::{AppShell, Config, GatewayHandle};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| match Config::from_build_env() {
        Ok(config) => GatewayHandle::new(build_gateway(&config)),
        Err(e) => {
            dioxus_logger::tracing::warn!("Identity gateway disabled: {}", e);
            GatewayHandle::unavailable()
        }
    });

    rsx! {
        AppShell {}
    }
}
