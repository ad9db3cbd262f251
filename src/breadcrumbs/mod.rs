//! breadcrumbs
//!
//! The breadcrumb component: trail derivation and event-driven publishing.
//!
//! # Modules
//!
//! - [`builder`] - [`BreadcrumbBuilder`] and the trail algorithm
//! - [`events`] - Trigger signals and the [`Breadcrumbs`] component

pub mod builder;
pub mod events;

pub use builder::BreadcrumbBuilder;
pub use events::{Breadcrumbs, NavigationEvent};
