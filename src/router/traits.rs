//! router::traits
//!
//! The consumed router contract.
//!
//! # Design
//!
//! The router owns the navigation-state tree; this crate only reads it. The
//! [`StateProvider`] trait is the whole surface the trail algorithm needs:
//! the current active state and lookup by name. States are returned as
//! snapshots ([`RouteState`]), so the component never aliases router-owned
//! data and the router is free to mutate its tree between triggers.
//!
//! Parent links are by name, not by reference; the walk re-resolves each
//! ancestor through the provider. The ancestor chain is assumed acyclic and
//! finite - a cyclic chain is a contract violation of the router, not
//! something detected here.
//!
//! # Example
//!
//! ```
//! use waymark::core::types::StateName;
//! use waymark::router::{RouteState, StateProvider};
//! use waymark::router::mock::MockRouter;
//!
//! let router = MockRouter::new();
//! router.register(RouteState::new(StateName::new("home").unwrap()));
//! router.navigate_to(&StateName::new("home").unwrap()).unwrap();
//!
//! let current = router.current_state().unwrap();
//! assert_eq!(current.name.as_str(), "home");
//! ```

use serde_json::{Map, Value};

use crate::core::path::{self, PathValue};
use crate::core::types::StateName;

/// Snapshot of one node in the router's navigation-state tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteState {
    /// Unique state identifier.
    pub name: StateName,
    /// Parent state name; `None` at the top of the tree (the parent is then
    /// the empty-named root, which never appears in a trail).
    pub parent: Option<StateName>,
    /// Whether the state is organizational only and cannot be navigated to.
    pub is_abstract: bool,
    /// Resolved runtime values scoped to this state for the active
    /// navigation; interpolation context lives under its `globals` member.
    pub locals: Option<Value>,
    /// Arbitrary per-state configuration, read via dotted-path lookups.
    pub data: Map<String, Value>,
}

impl RouteState {
    /// Create a plain navigable state with no parent, locals, or data.
    pub fn new(name: StateName) -> Self {
        Self {
            name,
            parent: None,
            is_abstract: false,
            locals: None,
            data: Map::new(),
        }
    }

    /// Set the parent state name.
    pub fn with_parent(mut self, parent: StateName) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Mark the state abstract (or navigable again).
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Attach resolved runtime values.
    pub fn with_locals(mut self, locals: Value) -> Self {
        self.locals = Some(locals);
        self
    }

    /// Add one entry to the state's data bag.
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// The state viewed as a JSON property tree.
    ///
    /// Data-bag entries sit at the top level; `name`, `abstract`, and
    /// `locals` are exposed as virtual members so dotted paths can reach
    /// them the same way.
    pub fn property_tree(&self) -> Value {
        let mut tree = self.data.clone();
        tree.insert("name".into(), Value::String(self.name.as_str().to_string()));
        tree.insert("abstract".into(), Value::Bool(self.is_abstract));
        if let Some(locals) = &self.locals {
            tree.insert("locals".into(), locals.clone());
        }
        Value::Object(tree)
    }

    /// Resolve a dotted path off this state.
    pub fn resolve(&self, path: &str) -> PathValue {
        path::resolve_path(&self.property_tree(), path)
    }
}

/// The router contract consumed by the breadcrumb component.
pub trait StateProvider {
    /// The currently active state, if any navigation has happened.
    fn current_state(&self) -> Option<RouteState>;

    /// Look up a registered state by name.
    fn lookup(&self, name: &StateName) -> Option<RouteState>;
}
