//! Common Test Utilities
//!
//! Shared fixtures used across the scenario and property suites:
//! - Encounter rosters with known ids and values (`fixtures`)

pub mod fixtures;

pub use fixtures::*;
