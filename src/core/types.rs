//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StateName`] - Validated route-state identifier
//! - [`BreadcrumbEntry`] - One entry of a published trail
//! - [`BreadcrumbTrail`] - Ordered trail, root-first
//!
//! # Validation
//!
//! [`StateName`] enforces validity at construction time. The empty string is
//! reserved for the traversal root and is only constructible through
//! [`StateName::root`], so a root sentinel can never be confused with an
//! ordinary state identifier.
//!
//! # Examples
//!
//! ```
//! use waymark::core::types::StateName;
//!
//! // Valid constructions
//! let name = StateName::new("admin.users").unwrap();
//! assert_eq!(name.as_str(), "admin.users");
//! assert!(!name.is_root());
//!
//! // The root sentinel
//! let root = StateName::root();
//! assert!(root.is_root());
//!
//! // Invalid constructions fail at creation time
//! assert!(StateName::new("").is_err());
//! assert!(StateName::new(".admin").is_err());
//! assert!(StateName::new("admin..users").is_err());
//! assert!(StateName::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid state name: {0}")]
    InvalidStateName(String),
}

/// A validated route-state name.
///
/// State names are dot-separated hierarchical identifiers in the style of
/// `admin.users.detail`. Rules:
/// - Cannot be empty (the empty string is the root sentinel, see
///   [`StateName::root`])
/// - Cannot start or end with `.`
/// - Cannot contain empty segments (`..`)
/// - Cannot contain whitespace or ASCII control characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateName(String);

impl StateName {
    /// Create a new validated state name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidStateName` if the name is empty or
    /// violates the segment rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// The root sentinel: the empty-named state every ancestor chain ends in.
    ///
    /// The root never appears in a breadcrumb trail.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Whether this name is the root sentinel.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidStateName(
                "state name cannot be empty (reserved for the root)".into(),
            ));
        }
        if name.starts_with('.') || name.ends_with('.') {
            return Err(TypeError::InvalidStateName(
                "state name cannot start or end with '.'".into(),
            ));
        }
        if name.contains("..") {
            return Err(TypeError::InvalidStateName(
                "state name cannot contain empty segments".into(),
            ));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidStateName(
                "state name cannot contain whitespace or control characters".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for StateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StateName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Serde must be able to round-trip the root sentinel.
        if value.is_empty() {
            return Ok(Self::root());
        }
        Self::new(value)
    }
}

impl From<StateName> for String {
    fn from(name: StateName) -> Self {
        name.0
    }
}

/// One entry of a breadcrumb trail.
///
/// Entries are created fresh on every recomputation and never mutated; the
/// whole trail is replaced wholesale on the next trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Resolved, human-readable label.
    pub display_name: String,
    /// Name of the state to navigate to.
    pub route: StateName,
}

impl BreadcrumbEntry {
    /// Create an entry from a label and a route.
    pub fn new(display_name: impl Into<String>, route: StateName) -> Self {
        Self {
            display_name: display_name.into(),
            route,
        }
    }
}

/// An ordered breadcrumb trail: root-first, leaf-last, no duplicate routes.
pub type BreadcrumbTrail = Vec<BreadcrumbEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_accepted() {
        for name in ["home", "admin.users", "a", "admin.users.detail", "shop-v2"] {
            assert!(StateName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn invalid_names_rejected() {
        for name in ["", ".admin", "admin.", "admin..users", "has space", "tab\there"] {
            assert!(StateName::new(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn root_is_root() {
        assert!(StateName::root().is_root());
        assert!(!StateName::new("home").unwrap().is_root());
    }

    #[test]
    fn empty_name_only_via_root() {
        assert!(StateName::new("").is_err());
        assert_eq!(StateName::root().as_str(), "");
    }

    #[test]
    fn serde_round_trip() {
        let name = StateName::new("admin.users").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let parsed: StateName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }

    #[test]
    fn serde_round_trips_root() {
        let json = serde_json::to_string(&StateName::root()).unwrap();
        let parsed: StateName = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_root());
    }

    #[test]
    fn display_matches_as_str() {
        let name = StateName::new("admin.users").unwrap();
        assert_eq!(name.to_string(), "admin.users");
    }

    #[test]
    fn entry_construction() {
        let entry = BreadcrumbEntry::new("Users", StateName::new("admin.users").unwrap());
        assert_eq!(entry.display_name, "Users");
        assert_eq!(entry.route.as_str(), "admin.users");
    }
}
