//! Identity gateway seam.
//!
//! A gateway owns the current identity and pushes every change to its
//! subscribers. Subscribers hold a [`Subscription`]; closing or dropping it
//! releases the callback exactly once.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use nova_types::Identity;

use crate::auth::error::AuthError;
use crate::auth::firebase::FirebaseGateway;
use crate::auth::local::LocalGateway;
use crate::config::{AuthProvider, Config};

/// Callback receiving the current identity, `None` when signed out.
pub type SessionListener = Box<dyn FnMut(Option<Identity>)>;

#[async_trait(?Send)]
pub trait IdentityGateway {
    /// Register `listener`. It is called once right away with the current
    /// identity and again on every change until the subscription is released.
    fn subscribe(&self, listener: SessionListener) -> Subscription;

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Finish restoring a session kept from an earlier visit. Subscribers
    /// registered before this completes get their first report from it.
    async fn resume(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Gateway handle provided through context. `None` when configuration failed.
#[derive(Clone, Default)]
pub struct GatewayHandle(Option<Rc<dyn IdentityGateway>>);

impl GatewayHandle {
    pub fn new(gateway: Rc<dyn IdentityGateway>) -> Self {
        Self(Some(gateway))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<Rc<dyn IdentityGateway>> {
        self.0.clone()
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

pub fn build_gateway(config: &Config) -> Rc<dyn IdentityGateway> {
    match &config.provider {
        AuthProvider::Firebase(firebase) => Rc::new(FirebaseGateway::restore(firebase.clone())),
        AuthProvider::Local => Rc::new(LocalGateway::new()),
    }
}

// ── Subscription ──────────────────────────────────────────────────────────────

/// Release handle for a registered listener.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn close(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

// ── Listener registry ─────────────────────────────────────────────────────────

type SharedListener<T> = Rc<RefCell<Box<dyn FnMut(T)>>>;

struct Slots<T> {
    next_id: u64,
    listeners: BTreeMap<u64, SharedListener<T>>,
}

/// Ordered set of listeners shared by the gateway implementations.
pub struct ListenerSet<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T: Clone + 'static> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Deliver `initial` to the listener, then keep it for later notifications.
    pub fn subscribe(&self, initial: T, mut listener: Box<dyn FnMut(T)>) -> Subscription {
        listener(initial);
        self.register(listener)
    }

    /// Keep the listener for later notifications without an initial report.
    pub fn register(&self, listener: Box<dyn FnMut(T)>) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.listeners.insert(id, Rc::new(RefCell::new(listener)));
            id
        };

        let slots: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().listeners.remove(&id);
            }
        })
    }

    /// Notify listeners in subscription order. A listener released by an
    /// earlier one during the same dispatch is skipped.
    pub fn notify(&self, value: T) {
        let snapshot: Vec<(u64, SharedListener<T>)> = self
            .slots
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if !self.slots.borrow().listeners.contains_key(&id) {
                continue;
            }
            let mut listener = listener.borrow_mut();
            (*listener)(value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + 'static> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, Box<dyn FnMut(u32)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Box::new(move |v| sink.borrow_mut().push(v)))
    }

    #[test]
    fn subscribe_delivers_initial_value_then_changes() {
        let set = ListenerSet::new();
        let (seen, listener) = recorder();
        let _sub = set.subscribe(1, listener);

        set.notify(2);
        set.notify(3);

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn registered_listener_waits_for_first_notification() {
        let set = ListenerSet::new();
        let (seen, listener) = recorder();
        let _sub = set.register(listener);
        assert!(seen.borrow().is_empty());

        set.notify(7);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn closed_subscription_stops_notifications() {
        let set = ListenerSet::new();
        let (seen, listener) = recorder();
        let sub = set.subscribe(1, listener);

        sub.close();
        set.notify(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(set.is_empty());
    }

    #[test]
    fn dropping_subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        {
            let released = Rc::clone(&released);
            let sub = Subscription::new(move || released.set(released.get() + 1));
            assert!(sub.is_active());
        }
        assert_eq!(released.get(), 1);

        let counter = Rc::clone(&released);
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        sub.close();
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn release_after_registry_is_gone_is_harmless() {
        let (_, listener) = recorder();
        let sub = {
            let set = ListenerSet::new();
            set.subscribe(0, listener)
        };
        sub.close();
    }

    #[test]
    fn listener_released_during_dispatch_is_skipped() {
        let set: ListenerSet<u32> = ListenerSet::new();
        let second: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let second_slot = Rc::clone(&second);
        let _first = set.subscribe(
            0,
            Box::new(move |v| {
                if v == 5 {
                    if let Some(sub) = second_slot.borrow_mut().take() {
                        sub.close();
                    }
                }
            }),
        );

        let (seen, listener) = recorder();
        *second.borrow_mut() = Some(set.subscribe(0, listener));

        set.notify(5);
        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(set.len(), 1);
    }
}
