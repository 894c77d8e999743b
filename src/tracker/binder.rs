//! Per-render binding pass.
//!
//! Walks the rendered rows once per render notification, resolves each
//! row's backing combatant, and records which behaviors the current viewer
//! gets on which entries. The controller keeps the result and validates
//! every later UI event against it, so a stale event can never act on an
//! entry the last render did not wire up.

use tracing::trace;

use crate::host::{markup::ListMarkup, schema::ListSchema, CombatantId, Encounter};

use super::reorder::RankedEntry;

/// Behaviors bound to one rendered entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBinding {
    pub id: CombatantId,
    /// Inline-editable initiative cell, for owned combatants.
    pub field: Option<FieldBinding>,
    /// Quick roll on the entry's roll control, for unowned combatants
    /// whose row renders one.
    pub roll: bool,
    pub drag_source: bool,
    pub drop_target: bool,
}

/// Editable cell state captured at bind time.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    /// Text the cell displayed when the list was rendered.
    pub initial: String,
}

/// Everything one render pass wired up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBindings {
    pub entries: Vec<EntryBinding>,
    /// Whether the container itself accepts drops past the last entry.
    pub list_drop_target: bool,
    /// Render-order snapshot drop resolution works against.
    pub order: Vec<RankedEntry>,
}

impl ListBindings {
    pub fn entry(&self, id: CombatantId) -> Option<&EntryBinding> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_editable(&self, id: CombatantId) -> bool {
        self.entry(id).is_some_and(|e| e.field.is_some())
    }
}

/// Walk `markup` and compute the bindings for the current viewer.
///
/// Rows without a combatant id, and rows whose id the encounter no longer
/// knows, are skipped entirely. Each remaining entry gets exactly one of
/// the two click behaviors: the editable field when the viewer owns the
/// combatant, otherwise the quick roll when the row renders a roll control.
pub fn bind_list(
    markup: &ListMarkup,
    schema: &dyn ListSchema,
    combat: &dyn Encounter,
) -> ListBindings {
    let gm = combat.is_gm();
    let mut bindings = ListBindings {
        list_drop_target: gm,
        ..ListBindings::default()
    };

    for row in markup.rows() {
        let Some(id) = row.combatant_id() else {
            continue;
        };
        let Some(combatant) = combat.combatant(id) else {
            trace!(combatant = %id, "row has no backing combatant; skipping");
            continue;
        };

        let mut entry = EntryBinding {
            id,
            field: None,
            roll: false,
            drag_source: gm,
            drop_target: gm,
        };
        if combatant.is_owner {
            if let Some(cell) = schema.initiative_cell(row) {
                entry.field = Some(FieldBinding {
                    initial: cell.text().to_string(),
                });
            }
        } else if schema.roll_control(row).is_some() {
            entry.roll = true;
        }

        bindings.order.push(RankedEntry {
            id,
            initiative: combatant.initiative,
        });
        bindings.entries.push(entry);
    }

    bindings
}
