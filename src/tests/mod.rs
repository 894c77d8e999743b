//! Cross-module test suites.
//!
//! Unit tests live next to the code they cover; this tree holds everything
//! that spans modules: shared fixtures, a mockall-backed host double, the
//! property suites, and end-to-end tracker scenarios driven through real
//! rendered markup.

pub mod common;
mod mocks;
mod property;
