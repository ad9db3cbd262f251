//! render
//!
//! Helpers for the rendering contract.
//!
//! # Design
//!
//! The rendering layer iterates the published trail in order, marking the
//! last entry as the active (non-link) entry and all others as navigable
//! links. These helpers express that contract without shipping a rendering
//! engine: [`render_trail`] attaches the active flag, [`format_trail`]
//! produces a plain-text line for terminals and logs.

use serde::Serialize;

use crate::core::types::{BreadcrumbEntry, StateName};

/// One trail entry prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCrumb {
    /// Resolved label.
    pub display_name: String,
    /// Navigation target for non-active entries.
    pub route: StateName,
    /// Whether this is the trailing, non-link entry.
    pub active: bool,
}

/// Mark the last entry of a trail active.
pub fn render_trail(trail: &[BreadcrumbEntry]) -> Vec<RenderedCrumb> {
    let last = trail.len().saturating_sub(1);
    trail
        .iter()
        .enumerate()
        .map(|(i, entry)| RenderedCrumb {
            display_name: entry.display_name.clone(),
            route: entry.route.clone(),
            active: i == last,
        })
        .collect()
}

/// Format a trail as a single line, marking the active entry.
///
/// ```
/// use waymark::core::types::{BreadcrumbEntry, StateName};
/// use waymark::render::format_trail;
///
/// let trail = vec![
///     BreadcrumbEntry::new("Home", StateName::new("home").unwrap()),
///     BreadcrumbEntry::new("Library", StateName::new("home.library").unwrap()),
/// ];
/// assert_eq!(format_trail(&trail, " > "), "Home > [Library]");
/// ```
pub fn format_trail(trail: &[BreadcrumbEntry], separator: &str) -> String {
    let last = trail.len().saturating_sub(1);
    trail
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == last {
                format!("[{}]", entry.display_name)
            } else {
                entry.display_name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}
