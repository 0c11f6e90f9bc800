//! Token Storage
//!
//! Durable home of the session token. The browser keeps it in
//! `localStorage`; [`MemoryTokenStore`] serves tests and browsers without
//! storage.

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key holding the session token
pub const TOKEN_KEY: &str = "authToken";

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
