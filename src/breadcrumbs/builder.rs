//! breadcrumbs::builder
//!
//! The trail algorithm.
//!
//! # Design
//!
//! [`BreadcrumbBuilder`] walks the active state's ancestor chain leaf-to-
//! root, resolves each ancestor to a working state (substituting abstract
//! states with their configured proxy), resolves a label, deduplicates by
//! route, and reverses into root-first order.
//!
//! Building never fails: every miss degrades to the state's own name or to
//! omitting the entry. Dependencies are passed in explicitly; the builder
//! holds no ambient state beyond its configuration.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use waymark::breadcrumbs::BreadcrumbBuilder;
//! use waymark::core::config::BreadcrumbConfig;
//! use waymark::core::types::StateName;
//! use waymark::interpolate::PatternInterpolator;
//! use waymark::router::mock::MockRouter;
//! use waymark::router::RouteState;
//!
//! let router = MockRouter::new();
//! router.register(
//!     RouteState::new(StateName::new("shop").unwrap())
//!         .with_data("title", json!("Shop")),
//! );
//! router.navigate_to(&StateName::new("shop").unwrap()).unwrap();
//!
//! let builder = BreadcrumbBuilder::new(
//!     router,
//!     PatternInterpolator::new(),
//!     BreadcrumbConfig::new().with_display_name_property("title"),
//! );
//! let trail = builder.build_trail();
//! assert_eq!(trail[0].display_name, "Shop");
//! ```

use serde_json::Value;
use tracing::{debug, trace};

use crate::core::config::BreadcrumbConfig;
use crate::core::path::PathValue;
use crate::core::types::{BreadcrumbEntry, BreadcrumbTrail, StateName};
use crate::interpolate::Interpolate;
use crate::router::{RouteState, StateProvider};

/// Derives breadcrumb trails from the provider's current state.
#[derive(Debug, Clone)]
pub struct BreadcrumbBuilder<P, I> {
    provider: P,
    interpolator: I,
    config: BreadcrumbConfig,
}

impl<P: StateProvider, I: Interpolate> BreadcrumbBuilder<P, I> {
    /// Create a builder over an explicit provider and interpolator.
    pub fn new(provider: P, interpolator: I, config: BreadcrumbConfig) -> Self {
        Self {
            provider,
            interpolator,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// The underlying state provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build a full trail from the provider's current state.
    ///
    /// The trail is root-first, leaf-last, and contains no duplicate routes.
    /// An inactive router or a current state at the root yields an empty
    /// trail.
    pub fn build_trail(&self) -> BreadcrumbTrail {
        let mut trail = BreadcrumbTrail::new();
        let mut cursor = self.provider.current_state();

        while let Some(state) = cursor.take() {
            if state.name.is_root() {
                break;
            }
            match self.working_state(&state) {
                Some(working) => {
                    if let Some(label) = self.display_name(&working) {
                        if !already_in_trail(&trail, &working.name) {
                            trail.push(BreadcrumbEntry::new(label, working.name.clone()));
                        }
                    } else {
                        trace!(state = %working.name, "display name suppressed, skipping");
                    }
                }
                None => trace!(state = %state.name, "no working state, skipping"),
            }
            // A parent the provider cannot resolve ends the walk.
            cursor = state.parent.as_ref().and_then(|p| self.provider.lookup(p));
        }

        trail.reverse();
        debug!(entries = trail.len(), "rebuilt breadcrumb trail");
        trail
    }

    /// The state an ancestor contributes to the trail.
    ///
    /// Non-abstract states pass through unchanged. An abstract state is
    /// substituted by the proxy named at the configured dotted path, with
    /// `locals` carried over from the abstract state so interpolation sees
    /// the runtime values of this navigation, not the target's. Without a
    /// proxy configuration, or when any resolution step misses, the
    /// ancestor contributes nothing.
    fn working_state(&self, state: &RouteState) -> Option<RouteState> {
        if !state.is_abstract {
            return Some(state.clone());
        }
        let property = self.config.abstract_proxy_property.as_ref()?;
        let PathValue::Found(Value::String(proxy)) = state.resolve(property) else {
            return None;
        };
        let proxy_name = StateName::new(proxy).ok()?;
        let mut target = self.provider.lookup(&proxy_name)?;
        target.locals = state.locals.clone();
        Some(target)
    }

    /// Resolve the label for a working state.
    ///
    /// Returns `None` when the configured property resolves to exactly
    /// `false`, which suppresses the breadcrumb entirely. An unset property
    /// or an absent value falls back to the state's name; anything else is
    /// treated as an interpolation template.
    fn display_name(&self, state: &RouteState) -> Option<String> {
        let Some(property) = &self.config.display_name_property else {
            return Some(state.name.as_str().to_string());
        };
        match state.resolve(property) {
            PathValue::Disabled => None,
            PathValue::Absent => Some(state.name.as_str().to_string()),
            PathValue::Found(value) => {
                let template = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                let context = interpolation_context(state);
                Some(self.interpolator.interpolate(&template, &context))
            }
        }
    }
}

/// Interpolation context for a state's display-name template.
///
/// The `globals` member of the state's `locals` when present, otherwise the
/// state's own property tree.
fn interpolation_context(state: &RouteState) -> Value {
    state
        .locals
        .as_ref()
        .and_then(|locals| locals.get("globals").cloned())
        .unwrap_or_else(|| state.property_tree())
}

/// Whether a route is already present in the accumulated trail.
///
/// Only matters when multiple abstract ancestors resolve to the same proxy.
fn already_in_trail(trail: &[BreadcrumbEntry], route: &StateName) -> bool {
    trail.iter().any(|entry| entry.route == *route)
}
