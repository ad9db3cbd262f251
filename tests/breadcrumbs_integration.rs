//! End-to-end tests for breadcrumb trail generation.
//!
//! These exercise the full component surface the way an embedding layer
//! would: register states on a router, attach the component, drive it with
//! navigation events, and read the published trail.

use serde_json::json;

use waymark::breadcrumbs::{BreadcrumbBuilder, Breadcrumbs, NavigationEvent};
use waymark::core::config::BreadcrumbConfig;
use waymark::core::types::{BreadcrumbEntry, StateName};
use waymark::interpolate::PatternInterpolator;
use waymark::render::{format_trail, render_trail};
use waymark::router::mock::MockRouter;
use waymark::router::RouteState;

fn name(s: &str) -> StateName {
    StateName::new(s).unwrap()
}

fn builder(
    router: &MockRouter,
    config: BreadcrumbConfig,
) -> BreadcrumbBuilder<MockRouter, PatternInterpolator> {
    BreadcrumbBuilder::new(router.clone(), PatternInterpolator::new(), config)
}

fn entries(trail: &[BreadcrumbEntry]) -> Vec<(&str, &str)> {
    trail
        .iter()
        .map(|e| (e.display_name.as_str(), e.route.as_str()))
        .collect()
}

/// Chain root -> admin(abstract) -> admin.users, no proxy configured:
/// the abstract ancestor contributes nothing.
#[test]
fn abstract_ancestor_skipped_without_proxy() {
    let router = MockRouter::new();
    router.register(RouteState::new(name("admin")).with_abstract(true));
    router.register(RouteState::new(name("admin.users")).with_parent(name("admin")));
    router.navigate_to(&name("admin.users")).unwrap();

    let trail = builder(&router, BreadcrumbConfig::new()).build_trail();
    assert_eq!(entries(&trail), [("admin.users", "admin.users")]);
}

/// Same chain with `abstract-proxy-property = "proxy"`, `admin.proxy`
/// naming an existing `dashboard` state: the proxy stands in for the
/// abstract ancestor.
#[test]
fn abstract_ancestor_substituted_by_proxy() {
    let router = MockRouter::new();
    router.register(RouteState::new(name("dashboard")));
    router.register(
        RouteState::new(name("admin"))
            .with_abstract(true)
            .with_data("proxy", json!("dashboard")),
    );
    router.register(RouteState::new(name("admin.users")).with_parent(name("admin")));
    router.navigate_to(&name("admin.users")).unwrap();

    let config = BreadcrumbConfig::new().with_abstract_proxy_property("proxy");
    let trail = builder(&router, config).build_trail();
    assert_eq!(
        entries(&trail),
        [("dashboard", "dashboard"), ("admin.users", "admin.users")]
    );
}

/// `display-name-property = "title"` with an interpolation template reads
/// its placeholders from the state's resolved runtime values.
#[test]
fn display_template_interpolates_runtime_values() {
    let router = MockRouter::new();
    router.register(
        RouteState::new(name("users.detail"))
            .with_data("title", json!("Users {{id}}"))
            .with_locals(json!({ "globals": { "id": 5 } })),
    );
    router.navigate_to(&name("users.detail")).unwrap();

    let config = BreadcrumbConfig::new().with_display_name_property("title");
    let trail = builder(&router, config).build_trail();
    assert_eq!(trail[0].display_name, "Users 5");
}

/// Full component lifecycle: attach guard, navigation events, refresh, and
/// wholesale replacement of the published trail.
#[test]
fn component_lifecycle() {
    let router = MockRouter::new();
    router.register(RouteState::new(name("shop")).with_data("title", json!("Shop")));
    router.register(
        RouteState::new(name("shop.cart"))
            .with_parent(name("shop"))
            .with_data("title", json!("Cart")),
    );

    let config = BreadcrumbConfig::new().with_display_name_property("title");
    let mut component = Breadcrumbs::attach(builder(&router, config));
    assert!(component.trail().is_empty());

    router.navigate_to(&name("shop.cart")).unwrap();
    component.handle(NavigationEvent::NavigationSucceeded);
    assert_eq!(
        entries(component.trail()),
        [("Shop", "shop"), ("Cart", "shop.cart")]
    );

    router.navigate_to(&name("shop")).unwrap();
    component.handle(NavigationEvent::NavigationSucceeded);
    assert_eq!(entries(component.trail()), [("Shop", "shop")]);

    // A refresh signal recomputes without a navigation.
    router.register(RouteState::new(name("shop")).with_data("title", json!("Store")));
    component.handle(NavigationEvent::RefreshBreadcrumbs);
    assert_eq!(entries(component.trail()), [("Store", "shop")]);
}

/// A deep mixed chain: abstract levels with and without proxies, a
/// suppressed level, and templated labels, all in one walk.
#[test]
fn mixed_chain() {
    let router = MockRouter::new();
    router.register(RouteState::new(name("overview")).with_data("title", json!("Overview")));
    router.register(
        RouteState::new(name("org"))
            .with_abstract(true)
            .with_data("proxy", json!("overview")),
    );
    // Abstract without a proxy value: contributes nothing.
    router.register(
        RouteState::new(name("org.region"))
            .with_parent(name("org"))
            .with_abstract(true),
    );
    // Suppressed outright.
    router.register(
        RouteState::new(name("org.region.internal"))
            .with_parent(name("org.region"))
            .with_data("title", json!(false)),
    );
    router.register(
        RouteState::new(name("org.region.internal.team"))
            .with_parent(name("org.region.internal"))
            .with_data("title", json!("Team {{team}}"))
            .with_locals(json!({ "globals": { "team": "Kestrel" } })),
    );
    router.navigate_to(&name("org.region.internal.team")).unwrap();

    let config = BreadcrumbConfig::new()
        .with_display_name_property("title")
        .with_abstract_proxy_property("proxy");
    let trail = builder(&router, config).build_trail();
    assert_eq!(
        entries(&trail),
        [("Overview", "overview"), ("Team Kestrel", "org.region.internal.team")]
    );
}

/// The rendering contract: last entry active, the rest navigable.
#[test]
fn rendering_contract() {
    let router = MockRouter::new();
    router.register(RouteState::new(name("home")));
    router.register(RouteState::new(name("home.library")).with_parent(name("home")));
    router.navigate_to(&name("home.library")).unwrap();

    let trail = builder(&router, BreadcrumbConfig::new()).build_trail();
    let rendered = render_trail(&trail);
    assert_eq!(rendered.len(), 2);
    assert!(!rendered[0].active);
    assert!(rendered[1].active);
    assert_eq!(format_trail(&trail, " > "), "home > [home.library]");
}

/// Configuration can come from a declarative TOML surface.
#[test]
fn config_from_toml_drives_builder() {
    let router = MockRouter::new();
    router.register(
        RouteState::new(name("docs")).with_data("breadcrumb", json!({ "label": "Documentation" })),
    );
    router.navigate_to(&name("docs")).unwrap();

    let config =
        BreadcrumbConfig::from_toml_str(r#"display-name-property = "breadcrumb.label""#).unwrap();
    let trail = builder(&router, config).build_trail();
    assert_eq!(entries(&trail), [("Documentation", "docs")]);
}
