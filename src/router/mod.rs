//! router
//!
//! The consumed router contract and a deterministic mock.
//!
//! # Modules
//!
//! - [`traits`] - [`RouteState`] snapshots and the [`StateProvider`] trait
//! - [`mock`] - In-memory [`mock::MockRouter`] for tests and examples

pub mod mock;
pub mod traits;

pub use traits::{RouteState, StateProvider};
