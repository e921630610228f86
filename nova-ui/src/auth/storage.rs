use nova_types::Identity;
use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "nova.auth.session";

/// Tokens this close to expiry are refreshed rather than trusted.
const EXPIRY_MARGIN_MS: f64 = 60_000.0;

/// Signed-in state kept across reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub identity: Identity,
    pub id_token: String,
    pub refresh_token: String,
    /// Milliseconds since the epoch when `id_token` stops being valid
    pub expires_at_ms: f64,
}

impl PersistedSession {
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms + EXPIRY_MARGIN_MS >= self.expires_at_ms
    }
}

pub fn load_persisted_session() -> Option<PersistedSession> {
    let raw = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())?;

    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            dioxus_logger::tracing::warn!("Discarding unreadable stored session: {}", e);
            clear_persisted_session();
            None
        }
    }
}

pub fn persist_session(session: &PersistedSession) {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            report_storage_write("store session", storage.set_item(SESSION_KEY, &raw));
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to serialize session for storage: {}", e);
        }
    }
}

pub fn clear_persisted_session() {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        report_storage_write("clear stored session", storage.remove_item(SESSION_KEY));
    }
}

/// Storage writes fail on quota limits and in some private browsing modes.
fn report_storage_write<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to {}: {:?}", action, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at_ms: f64) -> PersistedSession {
        PersistedSession {
            identity: Identity::new("uid-1", "a@x.com"),
            id_token: "id".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at_ms,
        }
    }

    #[test]
    fn token_is_trusted_until_the_margin() {
        let stored = session(1_000_000.0);
        assert!(!stored.is_expired(0.0));
        assert!(!stored.is_expired(1_000_000.0 - EXPIRY_MARGIN_MS - 1.0));
        assert!(stored.is_expired(1_000_000.0 - EXPIRY_MARGIN_MS));
        assert!(stored.is_expired(2_000_000.0));
    }

    #[test]
    fn failed_storage_write_is_reported() {
        assert!(report_storage_write::<&str>("store session", Ok(())));
        assert!(!report_storage_write("store session", Err("QuotaExceededError")));
    }
}
