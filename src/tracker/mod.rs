//! Combat tracker enhancement core.
//!
//! [`binder`] decides per render what the viewer may touch, [`field`] holds
//! the inline edit buffer, [`reorder`] turns drops into initiative values,
//! and [`controller`] ties the event surface together.

pub mod binder;
pub mod controller;
pub mod field;
pub mod reorder;

pub use binder::{EntryBinding, FieldBinding, ListBindings};
pub use controller::{EditSession, FieldKey, TrackerController};
pub use field::{parse_initiative, InitiativeField};
pub use reorder::{resolve_drop, DropTarget, RankedEntry};
