//! interpolate
//!
//! The consumed string-interpolation contract.
//!
//! # Design
//!
//! Display-name templates may carry `{{ path.to.value }}` placeholders that
//! are substituted against a context value (typically the resolved runtime
//! values of the active navigation). The host usually brings its own
//! template engine; [`PatternInterpolator`] is a built-in implementation so
//! the crate works standalone.
//!
//! Substitution never fails: a placeholder that resolves to nothing becomes
//! the empty string, and an unterminated `{{` is emitted literally.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use waymark::interpolate::{Interpolate, PatternInterpolator};
//!
//! let interpolator = PatternInterpolator::new();
//! let context = json!({ "user": { "name": "Ada" }, "id": 5 });
//!
//! let out = interpolator.interpolate("User {{ user.name }} ({{ id }})", &context);
//! assert_eq!(out, "User Ada (5)");
//! ```

use serde_json::Value;

use crate::core::path;

/// Template substitution of `{{ expr }}` placeholders against a context.
pub trait Interpolate {
    /// Substitute every placeholder in `template` with the value found at
    /// its dotted path in `context`.
    fn interpolate(&self, template: &str, context: &Value) -> String;
}

/// Built-in `{{ path }}` interpolator.
///
/// Placeholders hold a dotted path into the context; surrounding whitespace
/// inside the braces is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternInterpolator;

impl PatternInterpolator {
    /// Create an interpolator.
    pub fn new() -> Self {
        Self
    }
}

impl Interpolate for PatternInterpolator {
    fn interpolate(&self, template: &str, context: &Value) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                // Unterminated placeholder: emit the remainder literally.
                out.push_str(&rest[open..]);
                return out;
            };
            let expr = after_open[..close].trim();
            out.push_str(&render(path::lookup(context, expr)));
            rest = &after_open[close + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// Render one resolved placeholder value.
fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(compound) => serde_json::to_string(compound).unwrap_or_default(),
    }
}
