//! Load State
//!
//! Per-view `loading -> ready | failed` state, plus the epoch that keeps a
//! late response from overwriting a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Loadable::Ready(data),
            Err(err) => Loadable::Failed(err.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Proof that a load was started; only the newest ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct LoadEpoch {
    current: AtomicU64,
}

impl LoadEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding every earlier ticket
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Supersede any load in flight without starting a new one
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_newer_load_supersedes_older() {
        let epoch = LoadEpoch::new();
        let first = epoch.begin();
        assert!(epoch.is_current(first));

        let second = epoch.begin();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));

        epoch.invalidate();
        assert!(!epoch.is_current(second));
    }

    #[test]
    fn test_loadable_from_result() {
        let ready: Loadable<u32> = Loadable::from_result(Ok(3));
        assert_eq!(ready.ready(), Some(&3));
        assert!(!ready.is_loading());

        let failed: Loadable<u32> = Loadable::from_result(Err(ApiError::Status(502)));
        assert_eq!(failed.error(), Some("Something went wrong while loading data."));
        assert!(Loadable::<u32>::default().is_loading());
    }
}
