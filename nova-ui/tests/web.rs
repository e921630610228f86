//! Browser-only checks. Run with `wasm-pack test --headless --firefox nova-ui`.
#![cfg(target_arch = "wasm32")]

use nova_types::Identity;
use nova_ui::auth::storage::{
    clear_persisted_session, load_persisted_session, persist_session, PersistedSession,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn stored(uid: &str) -> PersistedSession {
    PersistedSession {
        identity: Identity::new(uid, "ada@example.com"),
        id_token: "id-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_at_ms: 1_700_000_000_000.0,
    }
}

#[wasm_bindgen_test]
fn session_survives_storage_round() {
    clear_persisted_session();
    assert_eq!(load_persisted_session(), None);

    persist_session(&stored("uid-1"));
    assert_eq!(load_persisted_session(), Some(stored("uid-1")));

    clear_persisted_session();
    assert_eq!(load_persisted_session(), None);
}

#[wasm_bindgen_test]
fn unreadable_session_is_discarded() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage");
    storage.set_item("nova.auth.session", "{not json").unwrap();

    assert_eq!(load_persisted_session(), None);
    assert_eq!(storage.get_item("nova.auth.session").unwrap(), None);
}
