//! Property-based tests for the initiative tracker
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `reorder_props`: Tests for drop-position initiative assignment
//!   - A midpoint result lands strictly between its neighbors
//!   - Dropping an entry onto itself or its successor changes nothing
//!   - The list stays in descending order after the assignment is applied
//!   - Unranked tail entries never contribute a reference value
//!
//! - `field_props`: Tests for the inline edit buffer
//!   - The cursor always sits on a character boundary
//!   - The first keystroke after focus replaces the whole value
//!   - Non-numeric commits parse to the NaN sentinel
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be raised via
//! the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod field_props;
mod reorder_props;
