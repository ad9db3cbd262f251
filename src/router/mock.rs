//! router::mock
//!
//! Mock router implementation for deterministic testing.
//!
//! # Design
//!
//! The mock router provides a deterministic implementation of the
//! [`StateProvider`] trait for use in tests and examples. It stores states
//! in memory and exposes `navigate_to` so a test can drive navigation while
//! a breadcrumb component holds a clone of the same router.
//!
//! Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
//!
//! # Example
//!
//! ```
//! use waymark::core::types::StateName;
//! use waymark::router::mock::MockRouter;
//! use waymark::router::{RouteState, StateProvider};
//!
//! let router = MockRouter::new();
//! let home = StateName::new("home").unwrap();
//! router.register(RouteState::new(home.clone()));
//!
//! // Nothing is active until a navigation happens.
//! assert!(router.current_state().is_none());
//!
//! router.navigate_to(&home).unwrap();
//! assert_eq!(router.current_state().unwrap().name, home);
//!
//! // Unknown targets are rejected.
//! assert!(router.navigate_to(&StateName::new("nope").unwrap()).is_err());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::traits::{RouteState, StateProvider};
use crate::core::types::StateName;

/// Errors from mock navigation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MockRouterError {
    /// The navigation target is not registered.
    #[error("unknown state: {0}")]
    UnknownState(StateName),

    /// The navigation target is abstract and cannot be activated directly.
    #[error("cannot navigate to abstract state: {0}")]
    AbstractTarget(StateName),
}

/// Mock router for testing.
#[derive(Debug, Clone, Default)]
pub struct MockRouter {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockRouterInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockRouterInner {
    /// Registered states by name.
    states: HashMap<StateName, RouteState>,
    /// Name of the active state, if any.
    current: Option<StateName>,
}

impl MockRouter {
    /// Create an empty mock router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state, replacing any previous state with the same name.
    pub fn register(&self, state: RouteState) {
        let mut inner = self.inner.lock().unwrap();
        inner.states.insert(state.name.clone(), state);
    }

    /// Make the named state current.
    ///
    /// # Errors
    ///
    /// Returns `MockRouterError::UnknownState` for unregistered names and
    /// `MockRouterError::AbstractTarget` for abstract states, mirroring a
    /// real router's refusal to activate them directly.
    pub fn navigate_to(&self, name: &StateName) -> Result<(), MockRouterError> {
        let mut inner = self.inner.lock().unwrap();
        let state = inner
            .states
            .get(name)
            .ok_or_else(|| MockRouterError::UnknownState(name.clone()))?;
        if state.is_abstract {
            return Err(MockRouterError::AbstractTarget(name.clone()));
        }
        inner.current = Some(name.clone());
        Ok(())
    }

    /// Clear the active state.
    pub fn reset(&self) {
        self.inner.lock().unwrap().current = None;
    }
}

impl StateProvider for MockRouter {
    fn current_state(&self) -> Option<RouteState> {
        let inner = self.inner.lock().unwrap();
        let name = inner.current.as_ref()?;
        inner.states.get(name).cloned()
    }

    fn lookup(&self, name: &StateName) -> Option<RouteState> {
        self.inner.lock().unwrap().states.get(name).cloned()
    }
}
