//! Bundled in-memory encounter.
//!
//! Backs the terminal host. Keeps the roster, the viewer's privilege flag,
//! and a revision counter the host polls to decide when to re-render.

use tracing::{debug, warn};

use super::{Combatant, CombatantId, Encounter};

#[derive(Debug, Default)]
pub struct LocalEncounter {
    combatants: Vec<Combatant>,
    gm: bool,
    revision: u64,
}

impl LocalEncounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a combatant and hand back its freshly minted id.
    pub fn recruit(
        &mut self,
        name: impl Into<String>,
        initiative: Option<f64>,
        is_owner: bool,
    ) -> CombatantId {
        let id = CombatantId::new();
        self.combatants.push(Combatant {
            id,
            name: name.into(),
            initiative,
            is_owner,
        });
        self.revision += 1;
        id
    }

    /// Switch the viewer's privilege. GM-equivalent privilege implies
    /// ownership of every combatant, so this changes what a render binds.
    pub fn set_gm(&mut self, gm: bool) {
        self.gm = gm;
        self.revision += 1;
    }

    /// Remove a combatant from the encounter.
    pub fn dismiss(&mut self, id: CombatantId) {
        let before = self.combatants.len();
        self.combatants.retain(|c| c.id != id);
        if self.combatants.len() != before {
            self.revision += 1;
        }
    }

    /// Monotonic change counter. Any mutation that alters what a render
    /// would show bumps it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Roster in tracker order: descending initiative, with unset and NaN
    /// values sinking to the bottom. Ties keep insertion order. Ownership
    /// flags are viewer-relative, like [`Encounter::combatant`].
    pub fn ordered(&self) -> Vec<Combatant> {
        let mut ordered: Vec<Combatant> = self
            .combatants
            .iter()
            .map(|c| self.viewer_relative(c.clone()))
            .collect();
        ordered.sort_by(|a, b| sort_rank(b).total_cmp(&sort_rank(a)));
        ordered
    }

    fn viewer_relative(&self, mut combatant: Combatant) -> Combatant {
        combatant.is_owner = combatant.is_owner || self.gm;
        combatant
    }
}

fn sort_rank(combatant: &Combatant) -> f64 {
    match combatant.initiative {
        Some(value) if !value.is_nan() => value,
        _ => f64::NEG_INFINITY,
    }
}

impl Encounter for LocalEncounter {
    fn combatant(&self, id: CombatantId) -> Option<Combatant> {
        self.combatants
            .iter()
            .find(|c| c.id == id)
            .map(|c| self.viewer_relative(c.clone()))
    }

    fn set_initiative(&mut self, id: CombatantId, value: f64) {
        match self.combatants.iter_mut().find(|c| c.id == id) {
            Some(combatant) => {
                debug!(combatant = %id, name = %combatant.name, value, "initiative set");
                combatant.initiative = Some(value);
                self.revision += 1;
            }
            None => warn!(combatant = %id, "initiative update for unknown combatant dropped"),
        }
    }

    fn is_gm(&self) -> bool {
        self.gm
    }
}
