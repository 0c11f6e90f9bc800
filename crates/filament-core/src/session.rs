//! Session Holder
//!
//! Owns the bearer token for the lifetime of one client. The token is read
//! from the store on construction; every change is written through to the
//! store and reported to the listener, so the UI never touches storage
//! directly.

use std::cell::RefCell;

use crate::storage::TokenStore;

type Listener = Box<dyn Fn(Option<String>)>;

pub struct Session {
    store: Box<dyn TokenStore>,
    token: RefCell<Option<String>>,
    listener: Option<Listener>,
}

impl Session {
    /// Restore whatever token the store holds
    pub fn restore(store: impl TokenStore + 'static) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        Self {
            store: Box::new(store),
            token: RefCell::new(token),
            listener: None,
        }
    }

    /// Called with the new token after sign-in and with `None` after sign-out
    pub fn with_listener(mut self, listener: impl Fn(Option<String>) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        log::info!("[Session] signed in");
        self.store.save(token);
        *self.token.borrow_mut() = Some(token.to_string());
        self.notify(Some(token.to_string()));
    }

    /// Clears the stored token. Safe to call when already signed out.
    pub fn sign_out(&self) {
        let had_token = self.token.borrow_mut().take().is_some();
        self.store.clear();
        if had_token {
            log::info!("[Session] signed out");
        }
        self.notify(None);
    }

    fn notify(&self, token: Option<String>) {
        if let Some(listener) = &self.listener {
            listener(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;
    use std::rc::Rc;

    #[test]
    fn test_restore_reads_store() {
        let session = Session::restore(MemoryTokenStore::with_token("abc"));
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));

        let empty = Session::restore(MemoryTokenStore::with_token(""));
        assert!(!empty.is_authenticated());
        assert_eq!(empty.token(), None);
    }

    #[test]
    fn test_sign_in_and_out_write_through() {
        let store = MemoryTokenStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let session = Session::restore(store.clone())
            .with_listener(move |t| seen_clone.borrow_mut().push(t));

        session.sign_in("t-1");
        assert_eq!(store.load().as_deref(), Some("t-1"));

        session.sign_out();
        session.sign_out();
        assert_eq!(store.load(), None);
        assert!(!session.is_authenticated());
        assert_eq!(*seen.borrow(), vec![Some("t-1".to_string()), None, None]);
    }
}
