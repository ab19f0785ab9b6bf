//! Fetch-and-render lifecycle state.
//!
//! [`ViewState`] is a one-shot state machine: it starts in `Loading` and
//! resolves exactly once to either `Error` or `Loaded`. [`MountGuard`] lets
//! the hosting view drop a response that arrives after teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::FetchError;
use crate::model::User;

/// What the users view is currently showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Request in flight (initial).
    #[default]
    Loading,
    /// Request failed; holds the user-visible message.
    Error(String),
    /// Request succeeded; users in source order.
    Loaded(Vec<User>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Fetched users, if the fetch succeeded.
    pub fn users(&self) -> Option<&[User]> {
        match self {
            ViewState::Loaded(users) => Some(users.as_slice()),
            _ => None,
        }
    }

    /// Apply the outcome of the single fetch attempt.
    ///
    /// Returns `true` if the state changed. Only `Loading` transitions; a
    /// resolved state never reverts or re-resolves.
    pub fn resolve(&mut self, outcome: Result<Vec<User>, FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(users) => ViewState::Loaded(users),
            Err(e) => ViewState::Error(e.to_string()),
        };
        true
    }
}

/// Anything that can produce the users collection once.
///
/// The browser implementation issues the HTTP request; the `mock` feature
/// provides a fixture-backed one.
#[allow(async_fn_in_trait)]
pub trait UserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

/// Liveness flag shared between a mounted view and its in-flight fetch.
///
/// Clones observe the same flag. Once [`release`](Self::release) is called
/// (on unmount) every clone reports not live.
#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Resolve `state` with `outcome` unless the view has been released.
    ///
    /// Returns `true` if the state changed.
    pub fn apply(&self, state: &mut ViewState, outcome: Result<Vec<User>, FetchError>) -> bool {
        self.is_live() && state.resolve(outcome)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_user as user;
    use crate::model::UserId;

    #[test]
    fn test_default_is_loading() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.users(), None);
    }

    #[test]
    fn test_resolve_success() {
        let mut state = ViewState::Loading;
        assert!(state.resolve(Ok(vec![user(2), user(1)])));
        let ids: Vec<_> = state.users().unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![UserId(2), UserId(1)]);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_resolve_error() {
        let mut state = ViewState::Loading;
        assert!(state.resolve(Err(FetchError::NoResponse)));
        assert_eq!(state.error(), Some("Error: No response received from server"));
        assert_eq!(state.users(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_resolve_is_one_shot() {
        let mut state = ViewState::Loading;
        assert!(state.resolve(Err(FetchError::UnexpectedStatus(204))));
        assert!(!state.resolve(Ok(vec![user(1)])));
        assert_eq!(state, ViewState::Error("Error: Received status code 204".to_string()));

        let mut state = ViewState::Loading;
        assert!(state.resolve(Ok(Vec::new())));
        assert!(!state.resolve(Err(FetchError::NoResponse)));
        assert_eq!(state, ViewState::Loaded(Vec::new()));
    }

    #[test]
    fn test_mount_guard_release_is_shared() {
        let guard = MountGuard::new();
        let task_side = guard.clone();
        assert!(task_side.is_live());
        guard.release();
        assert!(!task_side.is_live());
        assert!(!guard.is_live());
    }

    #[test]
    fn test_apply_while_live() {
        let guard = MountGuard::new();
        let mut state = ViewState::Loading;
        assert!(guard.apply(&mut state, Ok(vec![user(1)])));
        assert_eq!(state.users().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_apply_after_release_is_dropped() {
        let guard = MountGuard::new();
        guard.clone().release();

        let mut state = ViewState::Loading;
        assert!(!guard.apply(&mut state, Ok(vec![user(1)])));
        assert!(!guard.apply(&mut state, Err(FetchError::NoResponse)));
        assert_eq!(state, ViewState::Loading);
    }
}
