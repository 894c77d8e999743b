//! Encounter fixtures with stable, named handles.

use crate::host::{CombatantId, LocalEncounter};

/// A small mixed-ownership fight. Render order while every value holds:
/// Knight 15, Bandit 12, Squire 9, Mastiff unrolled.
pub struct Skirmish {
    pub encounter: LocalEncounter,
    /// Owned by the viewer, initiative 15.
    pub knight: CombatantId,
    /// Owned by the viewer, initiative 9.
    pub squire: CombatantId,
    /// Another player's, initiative 12.
    pub bandit: CombatantId,
    /// Another player's, not yet rolled.
    pub mastiff: CombatantId,
}

pub fn skirmish() -> Skirmish {
    let mut encounter = LocalEncounter::new();
    let knight = encounter.recruit("Knight", Some(15.0), true);
    let bandit = encounter.recruit("Bandit", Some(12.0), false);
    let squire = encounter.recruit("Squire", Some(9.0), true);
    let mastiff = encounter.recruit("Mastiff", None, false);
    Skirmish {
        encounter,
        knight,
        squire,
        bandit,
        mastiff,
    }
}
