//! breadcrumbs::events
//!
//! Event-driven recomputation and the published trail.
//!
//! # Design
//!
//! The host event system delivers two zero-payload signals: "navigation
//! succeeded" and "refresh breadcrumbs". Both request the same full,
//! synchronous recomputation; there is no debouncing and no partial update.
//! The published trail is replaced wholesale on every trigger, so readers
//! never observe a partially built trail.
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
//!
//! let builder = BreadcrumbBuilder::new(
//!     router.clone(),
//!     PatternInterpolator::new(),
//!     BreadcrumbConfig::default(),
//! );
//! // No navigation yet: attach publishes an empty trail.
//! let mut component = Breadcrumbs::attach(builder);
//! assert!(component.trail().is_empty());
//!
//! router.navigate_to(&StateName::new("home").unwrap()).unwrap();
//! component.handle(NavigationEvent::NavigationSucceeded);
//! assert_eq!(component.trail().len(), 1);
//! ```

use tracing::trace;

use super::builder::BreadcrumbBuilder;
use crate::core::types::{BreadcrumbEntry, BreadcrumbTrail};
use crate::interpolate::Interpolate;
use crate::router::StateProvider;

/// Zero-payload recompute requests from the host event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The router completed a navigation.
    NavigationSucceeded,
    /// An explicit external request to rebuild the trail.
    RefreshBreadcrumbs,
}

/// The breadcrumb component: owns the builder and the published trail.
#[derive(Debug, Clone)]
pub struct Breadcrumbs<P, I> {
    builder: BreadcrumbBuilder<P, I>,
    trail: BreadcrumbTrail,
}

impl<P: StateProvider, I: Interpolate> Breadcrumbs<P, I> {
    /// Attach the component, computing an initial trail when the router is
    /// already on a non-root state.
    pub fn attach(builder: BreadcrumbBuilder<P, I>) -> Self {
        let trail = match builder.provider().current_state() {
            Some(state) if !state.name.is_root() => builder.build_trail(),
            _ => BreadcrumbTrail::new(),
        };
        Self { builder, trail }
    }

    /// Handle one trigger signal: recompute and replace the trail wholesale.
    pub fn handle(&mut self, event: NavigationEvent) {
        trace!(?event, "recomputing breadcrumb trail");
        match event {
            NavigationEvent::NavigationSucceeded | NavigationEvent::RefreshBreadcrumbs => {
                self.trail = self.builder.build_trail();
            }
        }
    }

    /// The published trail, root-first.
    pub fn trail(&self) -> &[BreadcrumbEntry] {
        &self.trail
    }

    /// The underlying builder.
    pub fn builder(&self) -> &BreadcrumbBuilder<P, I> {
        &self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BreadcrumbConfig;
    use crate::core::types::StateName;
    use crate::interpolate::PatternInterpolator;
    use crate::router::mock::MockRouter;
    use crate::router::RouteState;

    fn name(s: &str) -> StateName {
        StateName::new(s).unwrap()
    }

    fn component(router: &MockRouter) -> Breadcrumbs<MockRouter, PatternInterpolator> {
        Breadcrumbs::attach(BreadcrumbBuilder::new(
            router.clone(),
            PatternInterpolator::new(),
            BreadcrumbConfig::default(),
        ))
    }

    #[test]
    fn attach_without_navigation_publishes_empty_trail() {
        let router = MockRouter::new();
        router.register(RouteState::new(name("home")));
        assert!(component(&router).trail().is_empty());
    }

    #[test]
    fn attach_on_active_state_computes_immediately() {
        let router = MockRouter::new();
        router.register(RouteState::new(name("home")));
        router.navigate_to(&name("home")).unwrap();
        assert_eq!(component(&router).trail().len(), 1);
    }

    #[test]
    fn navigation_succeeded_recomputes() {
        let router = MockRouter::new();
        router.register(RouteState::new(name("home")));
        router.register(RouteState::new(name("home.library")).with_parent(name("home")));
        router.navigate_to(&name("home")).unwrap();

        let mut component = component(&router);
        assert_eq!(component.trail().len(), 1);

        router.navigate_to(&name("home.library")).unwrap();
        component.handle(NavigationEvent::NavigationSucceeded);
        assert_eq!(component.trail().len(), 2);
    }

    #[test]
    fn refresh_recomputes_in_place() {
        let router = MockRouter::new();
        router.register(RouteState::new(name("home")));
        router.navigate_to(&name("home")).unwrap();

        let mut component = component(&router);
        // Re-registering the state changes what a rebuild sees.
        router.register(RouteState::new(name("home")).with_parent(name("gone")));
        component.handle(NavigationEvent::RefreshBreadcrumbs);
        assert_eq!(component.trail().len(), 1);
        assert_eq!(component.trail()[0].route, name("home"));
    }

    #[test]
    fn trail_replaced_wholesale() {
        let router = MockRouter::new();
        router.register(RouteState::new(name("a")));
        router.register(RouteState::new(name("b")));
        router.navigate_to(&name("a")).unwrap();

        let mut component = component(&router);
        router.navigate_to(&name("b")).unwrap();
        component.handle(NavigationEvent::NavigationSucceeded);

        assert_eq!(component.trail().len(), 1);
        assert_eq!(component.trail()[0].route, name("b"));
    }
}
