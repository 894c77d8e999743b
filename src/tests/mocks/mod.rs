//! Mock implementations for testing
//!
//! A mockall-backed host so controller tests can script exact host behavior
//! and assert on the mutation calls that reach it.

#![allow(dead_code)]

use mockall::mock;

use crate::host::{Combatant, CombatantId, Encounter};

mock! {
    pub Combat {}

    impl Encounter for Combat {
        fn combatant(&self, id: CombatantId) -> Option<Combatant>;
        fn set_initiative(&mut self, id: CombatantId, value: f64);
        fn is_gm(&self) -> bool;
    }
}

/// A combatant the mock can hand back for `id`, owned by the viewer.
pub fn owned_combatant(id: CombatantId, name: &str, initiative: Option<f64>) -> Combatant {
    Combatant {
        id,
        name: name.to_string(),
        initiative,
        is_owner: true,
    }
}
