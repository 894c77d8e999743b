//! Drop resolution for drag-and-drop reorder.
//!
//! A drop becomes at most one new initiative value for the dragged
//! combatant; the host re-sorts by initiative afterwards, so nothing here
//! touches list order directly. Midpoint assignment keeps a drop to a
//! single mutation, at the cost of values drifting non-integral over
//! repeated reorders.

use crate::host::CombatantId;

/// Where a drop landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Onto a specific rendered entry.
    Entry(CombatantId),
    /// Onto the list container itself, past the last entry.
    ListEnd,
}

/// One rendered entry in render order, captured at bind time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    pub id: CombatantId,
    pub initiative: Option<f64>,
}

/// Compute the initiative value that lands `dragged` at the drop position,
/// given the render-order snapshot the drag started against.
///
/// `None` means the drop is a no-op: dropping an entry onto itself, onto
/// its own immediate successor, onto the container when already last, or
/// onto a target that is no longer in the list.
pub fn resolve_drop(
    dragged: CombatantId,
    target: DropTarget,
    entries: &[RankedEntry],
) -> Option<f64> {
    match target {
        DropTarget::ListEnd => {
            // Slot below the last entry that still has a value.
            let last_ranked = entries
                .iter()
                .rev()
                .find_map(|e| e.initiative.map(|v| (e.id, v)));
            match last_ranked {
                None => Some(0.0),
                Some((id, _)) if id == dragged => None,
                Some((_, value)) => Some(value - 1.0),
            }
        }
        DropTarget::Entry(target_id) => {
            if target_id == dragged {
                return None;
            }
            let index = entries.iter().position(|e| e.id == target_id)?;
            let above = index.checked_sub(1).map(|i| entries[i]);
            if above.map(|e| e.id) == Some(dragged) {
                // Dragged entry already sits immediately above the target.
                return None;
            }
            let target_value = entries[index].initiative.unwrap_or(0.0);
            match above {
                Some(entry) => {
                    let above_value = entry.initiative.unwrap_or(0.0);
                    Some(target_value + (above_value - target_value) / 2.0)
                }
                None => Some(target_value + 1.0),
            }
        }
    }
}
