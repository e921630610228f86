//! Session lifecycle.
//!
//! The controller subscribes to the identity gateway once and forwards
//! every notification to a sink, normally the shell's `AppState` signal.
//! Without a gateway the session resolves to signed-out immediately.

use std::cell::Cell;
use std::rc::Rc;

use nova_types::Identity;

use crate::auth::gateway::{IdentityGateway, Subscription};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    /// Gateway has not reported yet.
    #[default]
    Unknown,
    /// Confirmed no session.
    Anonymous,
    /// Session exists.
    Authenticated(Identity),
}

impl Session {
    pub fn from_identity(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Session::Authenticated(identity),
            None => Session::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Session::Unknown)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

pub struct SessionController {
    subscription: Option<Subscription>,
    alive: Rc<Cell<bool>>,
}

impl SessionController {
    /// Start tracking the session. `on_change` sees the gateway's initial
    /// report and every later change, until [`close`](Self::close).
    pub fn start<F>(gateway: Option<&dyn IdentityGateway>, mut on_change: F) -> Self
    where
        F: FnMut(Option<Identity>) + 'static,
    {
        let alive = Rc::new(Cell::new(true));

        let Some(gateway) = gateway else {
            dioxus_logger::tracing::warn!("No identity gateway configured, starting signed out");
            on_change(None);
            return Self {
                subscription: None,
                alive,
            };
        };

        let guard = Rc::clone(&alive);
        let subscription = gateway.subscribe(Box::new(move |identity| {
            if guard.get() {
                on_change(identity);
            }
        }));

        Self {
            subscription: Some(subscription),
            alive,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop forwarding notifications and release the gateway subscription.
    /// Safe to call more than once; the release happens on the first call.
    pub fn close(&mut self) {
        self.alive.set(false);
        if let Some(subscription) = self.subscription.take() {
            subscription.close();
            dioxus_logger::tracing::debug!("Session subscription released");
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.close();
    }
}
