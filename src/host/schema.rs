//! Structural addressing for version-dependent row markup.
//!
//! Host versions differ in how they lay out a combatant row. Each supported
//! shape gets one adapter here; [`detect`] probes the rendered markup once
//! per render pass, and nothing outside this module branches on host
//! version.

use super::markup::{ListMarkup, Node};

/// Resolves the interesting pieces of one combatant row.
pub trait ListSchema {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// The initiative display cell inside `row`, if rendered.
    fn initiative_cell<'a>(&self, row: &'a Node) -> Option<&'a Node>;

    /// The roll-initiative control inside `row`, if rendered. Hosts omit it
    /// for viewers without permission on the combatant.
    fn roll_control<'a>(&self, row: &'a Node) -> Option<&'a Node>;
}

fn is_roll_control(node: &Node) -> bool {
    node.has_class("combatant-control") && node.has_class("roll")
}

/// Legacy row shape: the initiative cell and the controls sit directly
/// under the row.
#[derive(Debug, Clone, Copy)]
pub struct FlatSchema;

impl ListSchema for FlatSchema {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn initiative_cell<'a>(&self, row: &'a Node) -> Option<&'a Node> {
        row.find("initiative")
    }

    fn roll_control<'a>(&self, row: &'a Node) -> Option<&'a Node> {
        row.find_where(&is_roll_control)
    }
}

/// Current row shape: the initiative cell is wrapped in a `token-initiative`
/// block and the controls are grouped under `combatant-controls`.
#[derive(Debug, Clone, Copy)]
pub struct GroupedSchema;

impl ListSchema for GroupedSchema {
    fn name(&self) -> &'static str {
        "grouped"
    }

    fn initiative_cell<'a>(&self, row: &'a Node) -> Option<&'a Node> {
        row.find("token-initiative")?.find("initiative")
    }

    fn roll_control<'a>(&self, row: &'a Node) -> Option<&'a Node> {
        row.find("combatant-controls")?.find_where(&is_roll_control)
    }
}

/// Probe the rendered markup and pick the matching schema.
///
/// The probe keys off the `token-initiative` wrapper: presence anywhere in
/// the tree means the grouped shape. Resolved fresh on every render, so a
/// host migration mid-session is picked up without restating anything.
pub fn detect(markup: &ListMarkup) -> &'static dyn ListSchema {
    if markup.any_has_class("token-initiative") {
        &GroupedSchema
    } else {
        &FlatSchema
    }
}
