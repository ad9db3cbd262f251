//! core::config
//!
//! Breadcrumb configuration schema and loading.
//!
//! # Overview
//!
//! Two optional settings, both dotted paths resolved off a route state:
//! - `display_name_property` - where to find an entry's label (or an
//!   interpolation template); unset means "use the state's name"
//! - `abstract_proxy_property` - where to find the name of a navigable
//!   state that stands in for an abstract ancestor; unset means abstract
//!   ancestors are skipped
//!
//! The embedding layer usually supplies these as two declarative attributes;
//! they can also be read from a TOML table.
//!
//! # Example
//!
//! ```
//! use waymark::core::config::BreadcrumbConfig;
//!
//! let config = BreadcrumbConfig::from_toml_str(
//!     r#"
//!     display-name-property = "data.breadcrumb.title"
//!     abstract-proxy-property = "data.breadcrumb.proxy"
//!     "#,
//! ).unwrap();
//!
//! assert_eq!(config.display_name_property.as_deref(), Some("data.breadcrumb.title"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Per-instance breadcrumb configuration.
///
/// The defaults reproduce the unconfigured behavior: labels fall back to
/// state names and abstract ancestors contribute no breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BreadcrumbConfig {
    /// Dotted path to an entry's label or interpolation template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_property: Option<String>,

    /// Dotted path to the proxy-state name used for abstract ancestors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_proxy_property: Option<String>,
}

impl BreadcrumbConfig {
    /// Configuration with both properties unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display-name property path.
    pub fn with_display_name_property(mut self, path: impl Into<String>) -> Self {
        self.display_name_property = Some(path.into());
        self
    }

    /// Set the abstract-proxy property path.
    pub fn with_abstract_proxy_property(mut self, path: impl Into<String>) -> Self {
        self.abstract_proxy_property = Some(path.into());
        self
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` on malformed TOML or unknown keys,
    /// `ConfigError::InvalidValue` on malformed dotted paths.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, plus
    /// everything [`BreadcrumbConfig::from_toml_str`] returns.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate the configured dotted paths.
    ///
    /// A set property must be a non-empty path with non-empty segments.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending property.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_path("display-name-property", self.display_name_property.as_deref())?;
        validate_path("abstract-proxy-property", self.abstract_proxy_property.as_deref())?;
        Ok(())
    }
}

fn validate_path(key: &str, path: Option<&str>) -> Result<(), ConfigError> {
    let Some(path) = path else {
        return Ok(());
    };
    if path.is_empty() || path.split('.').any(|segment| segment.is_empty()) {
        return Err(ConfigError::InvalidValue(format!(
            "{key} must be a dotted path with non-empty segments, got '{path}'"
        )));
    }
    Ok(())
}
