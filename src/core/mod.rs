//! core
//!
//! Core domain types, dotted-path resolution, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: StateName, BreadcrumbEntry, BreadcrumbTrail
//! - [`path`] - Dotted-path resolution over a JSON value tree
//! - [`config`] - Configuration schema, validation, and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Resolution never fails: every miss is a value, not an error
//! - The false-vs-absent distinction survives all the way to the trail

pub mod config;
pub mod path;
pub mod types;
