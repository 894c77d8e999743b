//! Property-based tests for drop-position initiative assignment
//!
//! Tests invariants:
//! - A midpoint result lands strictly between the target and its predecessor
//! - Applying the result and re-sorting puts the dragged entry right above
//!   the target
//! - Self-drops, successor drops, and vanished targets are no-ops
//! - List-end drops reference the last ranked entry, never the unranked tail

use proptest::prelude::*;

use crate::host::CombatantId;
use crate::tracker::{resolve_drop, DropTarget, RankedEntry};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Distinct descending ranks on an integer grid, the shape a rendered
/// initiative list always has.
fn arb_ranked_list() -> impl Strategy<Value = Vec<RankedEntry>> {
    prop::collection::btree_set(-1_000_000i64..1_000_000, 2..12).prop_map(|values| {
        values
            .into_iter()
            .rev()
            .map(|v| RankedEntry {
                id: CombatantId::new(),
                initiative: Some(v as f64),
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: a drop onto an entry with a predecessor lands strictly
    /// between the two, and the dragged entry re-sorts to the slot directly
    /// above the target.
    #[test]
    fn prop_midpoint_lands_strictly_between(
        entries in arb_ranked_list(),
        target_pick in any::<prop::sample::Index>(),
        dragged_pick in any::<prop::sample::Index>(),
    ) {
        let t = 1 + target_pick.index(entries.len() - 1);
        let d = dragged_pick.index(entries.len());
        prop_assume!(d != t && d != t - 1);

        let dragged = entries[d].id;
        let target = entries[t].id;
        let value = resolve_drop(dragged, DropTarget::Entry(target), &entries)
            .expect("drop between distinct entries must produce a value");

        let above = entries[t - 1].initiative.unwrap();
        let below = entries[t].initiative.unwrap();
        prop_assert!(
            above > value && value > below,
            "expected {above} > {value} > {below}"
        );

        let mut resorted: Vec<(CombatantId, f64)> = entries
            .iter()
            .map(|e| {
                let v = if e.id == dragged { value } else { e.initiative.unwrap() };
                (e.id, v)
            })
            .collect();
        resorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        let dragged_at = resorted.iter().position(|&(id, _)| id == dragged).unwrap();
        let target_at = resorted.iter().position(|&(id, _)| id == target).unwrap();
        prop_assert_eq!(dragged_at + 1, target_at);
    }

    /// Property: dropping an entry onto itself or onto its direct successor
    /// changes nothing.
    #[test]
    fn prop_self_and_successor_drops_are_noops(
        entries in arb_ranked_list(),
        pick in any::<prop::sample::Index>(),
    ) {
        let i = pick.index(entries.len());
        let id = entries[i].id;
        prop_assert_eq!(resolve_drop(id, DropTarget::Entry(id), &entries), None);
        if i + 1 < entries.len() {
            let successor = entries[i + 1].id;
            prop_assert_eq!(
                resolve_drop(id, DropTarget::Entry(successor), &entries),
                None
            );
        }
    }

    /// Property: a target no longer present in the rendered order is a
    /// no-op.
    #[test]
    fn prop_stale_target_is_noop(
        entries in arb_ranked_list(),
        pick in any::<prop::sample::Index>(),
    ) {
        let d = pick.index(entries.len());
        let ghost = CombatantId::new();
        prop_assert_eq!(
            resolve_drop(entries[d].id, DropTarget::Entry(ghost), &entries),
            None
        );
    }

    /// Property: dropping onto the head entry goes one above its value.
    #[test]
    fn prop_drop_on_head_goes_one_above(
        entries in arb_ranked_list(),
        pick in any::<prop::sample::Index>(),
    ) {
        let d = 1 + pick.index(entries.len() - 1);
        let head = entries[0];
        let result = resolve_drop(entries[d].id, DropTarget::Entry(head.id), &entries);
        prop_assert_eq!(result, Some(head.initiative.unwrap() + 1.0));
    }

    /// Property: list-end drops take their reference value from the last
    /// ranked entry, skipping any unranked tail.
    #[test]
    fn prop_list_end_skips_unranked_tail(
        ranked in arb_ranked_list(),
        tail in 0usize..4,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut entries = ranked;
        let last_ranked = entries[entries.len() - 1];
        for _ in 0..tail {
            entries.push(RankedEntry {
                id: CombatantId::new(),
                initiative: None,
            });
        }
        let dragged = entries[pick.index(entries.len())].id;
        let result = resolve_drop(dragged, DropTarget::ListEnd, &entries);
        if dragged == last_ranked.id {
            prop_assert_eq!(result, None);
        } else {
            prop_assert_eq!(result, Some(last_ranked.initiative.unwrap() - 1.0));
        }
    }
}
