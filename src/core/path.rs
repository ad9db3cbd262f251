//! core::path
//!
//! Safe dotted-path resolution over a JSON value tree.
//!
//! # Design
//!
//! Breadcrumb configuration points at state properties with dotted paths
//! such as `data.breadcrumb.title`. Resolution walks object keys segment by
//! segment and never fails: a missing segment yields [`PathValue::Absent`].
//!
//! A resolved value of exactly boolean `false` is a distinct outcome,
//! [`PathValue::Disabled`] - it means "suppress this breadcrumb", which must
//! not collapse into "property not set". An explicit JSON `null` counts as
//! absent.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use waymark::core::path::{resolve_path, PathValue};
//!
//! let tree = json!({ "data": { "title": "Users", "breadcrumb": false } });
//!
//! assert_eq!(resolve_path(&tree, "data.title"), PathValue::Found(json!("Users")));
//! assert_eq!(resolve_path(&tree, "data.breadcrumb"), PathValue::Disabled);
//! assert_eq!(resolve_path(&tree, "data.missing"), PathValue::Absent);
//! ```

use serde_json::Value;

/// Outcome of a dotted-path lookup.
///
/// `Disabled` (a final value of exactly `false`) and `Absent` are distinct:
/// downstream, the former suppresses a breadcrumb while the latter falls
/// back to the state's own name.
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue {
    /// The path resolved to a value other than `false`.
    Found(Value),
    /// The path resolved to exactly boolean `false`.
    Disabled,
    /// Some segment of the path was missing, or the value was `null`.
    Absent,
}

impl PathValue {
    /// Classify a raw lookup result.
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => PathValue::Absent,
            Some(Value::Bool(false)) => PathValue::Disabled,
            Some(v) => PathValue::Found(v.clone()),
        }
    }
}

/// Walk `root` along a dotted path, returning the value at its end.
///
/// Returns `None` as soon as any segment is missing. Intermediate
/// non-object values cannot be descended into and also yield `None`.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cursor = root;
    for segment in path.split('.') {
        cursor = cursor.as_object()?.get(segment)?;
    }
    Some(cursor)
}

/// Resolve a dotted path to its tri-state outcome.
pub fn resolve_path(root: &Value, path: &str) -> PathValue {
    PathValue::classify(lookup(root, path))
}
