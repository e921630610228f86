//! Firebase Authentication over the Identity Toolkit REST API.
//!
//! Only email/password accounts are supported. The signed-in session is
//! kept in local storage. On reload a still-valid token is reported right
//! away; an expired one is exchanged for a fresh token in [`resume`]
//! before any subscriber hears about the session, matching the SDK's
//! default persistence.
//!
//! [`resume`]: IdentityGateway::resume

use std::cell::RefCell;

use async_trait::async_trait;
use gloo_net::http::Request;
use nova_types::Identity;
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::auth::gateway::{IdentityGateway, ListenerSet, SessionListener, Subscription};
use crate::auth::storage::{
    clear_persisted_session, load_persisted_session, persist_session, PersistedSession,
};
use crate::config::FirebaseConfig;

pub struct FirebaseGateway {
    config: FirebaseConfig,
    current: RefCell<Option<PersistedSession>>,
    /// Stored session whose token expired, waiting for `resume`.
    stale: RefCell<Option<PersistedSession>>,
    listeners: ListenerSet<Option<Identity>>,
}

impl FirebaseGateway {
    /// Create the gateway, picking up any session left in local storage.
    pub fn restore(config: FirebaseConfig) -> Self {
        dioxus_logger::tracing::info!("Using Firebase project {}", config.project_label());

        let (current, stale) = split_restored(load_persisted_session(), js_sys::Date::now());
        if let Some(session) = &current {
            dioxus_logger::tracing::info!("Restored session for {}", session.identity.email);
        }
        if let Some(session) = &stale {
            dioxus_logger::tracing::info!(
                "Stored session for {} needs a token refresh",
                session.identity.email
            );
        }

        Self {
            config,
            current: RefCell::new(current),
            stale: RefCell::new(stale),
            listeners: ListenerSet::new(),
        }
    }

    fn identity(&self) -> Option<Identity> {
        self.current
            .borrow()
            .as_ref()
            .map(|session| session.identity.clone())
    }

    async fn password_exchange(
        &self,
        method: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        log::debug!("identity toolkit request: accounts:{method}");

        let response = Request::post(&self.config.endpoint(method))
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        let session = parse_password_response(status, &body, js_sys::Date::now())?;
        self.establish(session);
        Ok(())
    }

    async fn refresh(&self, stale: &PersistedSession) -> Result<PersistedSession, AuthError> {
        log::debug!("secure token request: refresh for {}", stale.identity.uid);

        let response = Request::post(&self.config.token_endpoint())
            .json(&RefreshRequest {
                grant_type: "refresh_token",
                refresh_token: &stale.refresh_token,
            })
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        parse_refresh_response(status, &body, &stale.identity, js_sys::Date::now())
    }

    fn establish(&self, session: PersistedSession) {
        let identity = session.identity.clone();
        persist_session(&session);
        self.stale.borrow_mut().take();
        *self.current.borrow_mut() = Some(session);
        dioxus_logger::tracing::info!("Signed in as {}", identity.email);
        self.listeners.notify(Some(identity));
    }
}

#[async_trait(?Send)]
impl IdentityGateway for FirebaseGateway {
    fn subscribe(&self, listener: SessionListener) -> Subscription {
        if self.stale.borrow().is_some() {
            return self.listeners.register(listener);
        }
        self.listeners.subscribe(self.identity(), listener)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.password_exchange("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.password_exchange("signUp", email, password).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        clear_persisted_session();
        let stale = self.stale.borrow_mut().take();
        let previous = self.current.borrow_mut().take();
        if let Some(session) = previous.or(stale) {
            dioxus_logger::tracing::info!("Signed out {}", session.identity.email);
            self.listeners.notify(None);
        }
        Ok(())
    }

    async fn resume(&self) -> Result<(), AuthError> {
        let Some(stale) = self.stale.borrow().clone() else {
            return Ok(());
        };
        let refreshed = self.refresh(&stale).await;

        // A sign-in or sign-out during the exchange has already reported.
        if self.stale.borrow().is_none() {
            return Ok(());
        }

        match refreshed {
            Ok(session) => {
                self.establish(session);
                Ok(())
            }
            Err(e) => {
                if discards_stored_session(&e) {
                    clear_persisted_session();
                }
                self.stale.borrow_mut().take();
                self.listeners.notify(None);
                Err(e)
            }
        }
    }
}

/// Split a stored session into one usable now and one needing a refresh.
fn split_restored(
    stored: Option<PersistedSession>,
    now_ms: f64,
) -> (Option<PersistedSession>, Option<PersistedSession>) {
    match stored {
        Some(session) if session.is_expired(now_ms) => (None, Some(session)),
        other => (other, None),
    }
}

/// A refused refresh token will never work again; a transport failure may
/// succeed on the next visit, so the stored session is kept for that.
fn discards_stored_session(error: &AuthError) -> bool {
    !matches!(error, AuthError::Network(_))
}

fn transport_error(e: gloo_net::Error) -> AuthError {
    dioxus_logger::tracing::error!("Identity toolkit request failed: {}", e);
    AuthError::Network(e.to_string())
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: String,
    /// Seconds, sent as a decimal string
    expires_in: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'a str,
    refresh_token: &'a str,
}

/// The token endpoint answers in snake_case, unlike Identity Toolkit.
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_from_response(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AuthError::rejected(&envelope.error.message),
        Err(_) if body.trim().is_empty() => AuthError::Network(format!("HTTP error: {status}")),
        Err(_) => AuthError::Network(format!("HTTP error: {status} ({})", body.trim())),
    }
}

fn expires_at(now_ms: f64, expires_in: &str) -> Result<f64, AuthError> {
    let seconds: f64 = expires_in
        .parse()
        .map_err(|_| AuthError::MalformedResponse(format!("expiresIn={expires_in}")))?;
    Ok(now_ms + seconds * 1000.0)
}

fn parse_password_response(
    status: u16,
    body: &str,
    now_ms: f64,
) -> Result<PersistedSession, AuthError> {
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, body));
    }

    let response: PasswordResponse =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
    let expires_at_ms = expires_at(now_ms, &response.expires_in)?;

    Ok(PersistedSession {
        identity: Identity::new(response.local_id, response.email),
        id_token: response.id_token,
        refresh_token: response.refresh_token,
        expires_at_ms,
    })
}

fn parse_refresh_response(
    status: u16,
    body: &str,
    identity: &Identity,
    now_ms: f64,
) -> Result<PersistedSession, AuthError> {
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, body));
    }

    let response: RefreshResponse =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
    if response.user_id != identity.uid {
        return Err(AuthError::MalformedResponse(format!(
            "refreshed token belongs to {}",
            response.user_id
        )));
    }
    let expires_at_ms = expires_at(now_ms, &response.expires_in)?;

    Ok(PersistedSession {
        identity: identity.clone(),
        id_token: response.id_token,
        refresh_token: response.refresh_token,
        expires_at_ms,
    })
}
