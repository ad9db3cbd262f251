//! Waymark - breadcrumb trails for hierarchical client-side routers
//!
//! Waymark derives an ordered breadcrumb trail from the current navigation
//! state of a hierarchical router: it walks the active state's ancestor
//! chain, resolves a label for each ancestor, substitutes abstract
//! (non-navigable) states with a configured proxy, deduplicates repeated
//! entries, and publishes the result root-first for a rendering layer to
//! consume.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, dotted-path resolution, and configuration
//! - [`router`] - The consumed router contract ([`router::StateProvider`])
//!   and a deterministic mock for testing
//! - [`interpolate`] - The consumed `{{ path }}` interpolation contract and
//!   a built-in implementation
//! - [`breadcrumbs`] - The trail algorithm and the event-driven component
//!   that owns the published trail
//! - [`render`] - Helpers for the rendering contract (active-entry marking,
//!   plain-text formatting)
//!
//! # Correctness Invariants
//!
//! 1. A published trail never contains two entries with the same route
//! 2. Trail order matches ancestor order: root first, current state last
//! 3. Every recomputation replaces the trail wholesale; readers never
//!    observe a partially built trail
//! 4. Trail building never fails: every lookup miss degrades to the state's
//!    own name or to omitting the entry
//!
//! # Example
//!
//! ```
//! use waymark::breadcrumbs::{BreadcrumbBuilder, Breadcrumbs, NavigationEvent};
//! use waymark::core::config::BreadcrumbConfig;
//! use waymark::core::types::StateName;
//! use waymark::interpolate::PatternInterpolator;
//! use waymark::router::mock::MockRouter;
//! use waymark::router::RouteState;
//!
//! let router = MockRouter::new();
//! router.register(RouteState::new(StateName::new("home").unwrap()));
//! router.register(
//!     RouteState::new(StateName::new("home.library").unwrap())
//!         .with_parent(StateName::new("home").unwrap()),
//! );
//! router.navigate_to(&StateName::new("home.library").unwrap()).unwrap();
//!
//! let builder = BreadcrumbBuilder::new(
//!     router.clone(),
//!     PatternInterpolator::new(),
//!     BreadcrumbConfig::default(),
//! );
//! let mut component = Breadcrumbs::attach(builder);
//!
//! let labels: Vec<_> = component.trail().iter().map(|e| e.display_name.as_str()).collect();
//! assert_eq!(labels, ["home", "home.library"]);
//!
//! router.navigate_to(&StateName::new("home").unwrap()).unwrap();
//! component.handle(NavigationEvent::NavigationSucceeded);
//! assert_eq!(component.trail().len(), 1);
//! ```

pub mod breadcrumbs;
pub mod core;
pub mod interpolate;
pub mod render;
pub mod router;
