//! In-memory identity provider for running the UI without Firebase.
//!
//! Accounts live for the lifetime of the page. Validation mirrors the
//! provider's error codes so the Auth screen behaves the same way.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use nova_types::Identity;

use crate::auth::error::AuthError;
use crate::auth::gateway::{IdentityGateway, ListenerSet, SessionListener, Subscription};

const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    uid: String,
    password: String,
}

pub struct LocalGateway {
    accounts: RefCell<HashMap<String, Account>>,
    current: RefCell<Option<Identity>>,
    listeners: ListenerSet<Option<Identity>>,
}

impl LocalGateway {
    pub fn new() -> Self {
        Self {
            accounts: RefCell::new(HashMap::new()),
            current: RefCell::new(None),
            listeners: ListenerSet::new(),
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_current(&self, identity: Option<Identity>) {
        *self.current.borrow_mut() = identity.clone();
        self.listeners.notify(identity);
    }
}

impl Default for LocalGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl IdentityGateway for LocalGateway {
    fn subscribe(&self, listener: SessionListener) -> Subscription {
        self.listeners.subscribe(self.current_identity(), listener)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = normalize_email(email)?;
        if password.is_empty() {
            return Err(AuthError::rejected("MISSING_PASSWORD"));
        }

        let uid = {
            let accounts = self.accounts.borrow();
            match accounts.get(&email) {
                Some(account) if account.password == password => account.uid.clone(),
                _ => return Err(AuthError::rejected("INVALID_LOGIN_CREDENTIALS")),
            }
        };

        self.set_current(Some(Identity::new(uid, email)));
        Ok(())
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::rejected(
                "WEAK_PASSWORD : Password should be at least 6 characters",
            ));
        }

        let uid = {
            let mut accounts = self.accounts.borrow_mut();
            if accounts.contains_key(&email) {
                return Err(AuthError::rejected("EMAIL_EXISTS"));
            }
            let uid = uuid::Uuid::new_v4().to_string();
            accounts.insert(
                email.clone(),
                Account {
                    uid: uid.clone(),
                    password: password.to_string(),
                },
            );
            uid
        };

        self.set_current(Some(Identity::new(uid, email)));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.current.borrow().is_some() {
            self.set_current(None);
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_ascii_lowercase();
    if email.is_empty() {
        return Err(AuthError::rejected("MISSING_EMAIL"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(AuthError::rejected("INVALID_EMAIL"));
    }
    let valid = match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(AuthError::rejected("INVALID_EMAIL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn watch(gateway: &LocalGateway) -> (Rc<RefCell<Vec<Option<String>>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = gateway.subscribe(Box::new(move |identity: Option<Identity>| {
            sink.borrow_mut().push(identity.map(|i| i.email));
        }));
        (seen, sub)
    }

    #[test]
    fn sign_up_signs_in_and_notifies() {
        let gateway = LocalGateway::new();
        let (seen, _sub) = watch(&gateway);

        block_on(gateway.sign_up("A@X.com", "secret1")).expect("sign up");

        assert_eq!(*seen.borrow(), vec![None, Some("a@x.com".to_string())]);
        assert_eq!(gateway.current_identity().map(|i| i.email).as_deref(), Some("a@x.com"));
    }

    #[test]
    fn sign_in_checks_password() {
        let gateway = LocalGateway::new();
        block_on(gateway.sign_up("a@x.com", "secret1")).unwrap();
        block_on(gateway.sign_out()).unwrap();

        let err = block_on(gateway.sign_in("a@x.com", "wrong-pw")).expect_err("must fail");
        assert_eq!(err.code(), Some("INVALID_LOGIN_CREDENTIALS"));
        assert!(gateway.current_identity().is_none());

        block_on(gateway.sign_in("a@x.com", "secret1")).expect("sign in");
        assert!(gateway.current_identity().is_some());
    }

    #[test]
    fn sign_up_validation() {
        let gateway = LocalGateway::new();

        let err = block_on(gateway.sign_up("not-an-email", "secret1")).unwrap_err();
        assert_eq!(err.code(), Some("INVALID_EMAIL"));

        let err = block_on(gateway.sign_up("a@x.com", "123")).unwrap_err();
        assert_eq!(err.code(), Some("WEAK_PASSWORD"));

        block_on(gateway.sign_up("a@x.com", "secret1")).unwrap();
        let err = block_on(gateway.sign_up("a@x.com", "secret2")).unwrap_err();
        assert_eq!(err.code(), Some("EMAIL_EXISTS"));
    }

    #[test]
    fn malformed_addresses_are_invalid() {
        for email in ["a@@x.com", "a@b@x.com", "a b@x.com", "a@x .com", "@x.com", "a@x."] {
            let err = normalize_email(email).unwrap_err();
            assert_eq!(err.code(), Some("INVALID_EMAIL"), "{email}");
        }
        assert_eq!(normalize_email("  Ada@X.com ").unwrap(), "ada@x.com");
    }

    #[test]
    fn sign_out_when_signed_out_is_silent() {
        let gateway = LocalGateway::new();
        let (seen, _sub) = watch(&gateway);

        block_on(gateway.sign_out()).unwrap();
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn closed_subscription_is_removed() {
        let gateway = LocalGateway::new();
        let (seen, sub) = watch(&gateway);
        assert_eq!(gateway.subscriber_count(), 1);

        sub.close();
        block_on(gateway.sign_up("a@x.com", "secret1")).unwrap();

        assert_eq!(gateway.subscriber_count(), 0);
        assert_eq!(*seen.borrow(), vec![None]);
    }
}
