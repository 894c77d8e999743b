//! Host application boundary.
//!
//! The tracker never talks to a concrete UI toolkit. On every render the
//! host hands over a [`markup::ListMarkup`] snapshot of what it drew, a
//! [`schema::ListSchema`] adapter resolves the version-dependent row
//! structure, and combat data flows through the [`Encounter`] trait.
//! [`encounter::LocalEncounter`] is the bundled in-memory implementation
//! used by the terminal host.

pub mod encounter;
pub mod markup;
pub mod schema;

pub use encounter::LocalEncounter;
pub use markup::{ListMarkup, Node};
pub use schema::{detect, FlatSchema, GroupedSchema, ListSchema};

use std::fmt;

use uuid::Uuid;

/// Opaque combatant identity, minted by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatantId(Uuid);

impl CombatantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CombatantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of one combatant as the host exposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    /// Sort key for the tracker list. `None` until rolled or assigned.
    pub initiative: Option<f64>,
    /// Whether the current viewer owns this combatant.
    pub is_owner: bool,
}

/// Access to the active combat encounter, as granted by the host.
///
/// Mutations are fire-and-forget: the host persists, broadcasts, and
/// re-renders on its own schedule, and the tracker learns the outcome
/// from the next render notification.
pub trait Encounter {
    /// Resolve a combatant by id. `None` for ids this encounter does not
    /// know, including combatants removed since the markup was drawn.
    fn combatant(&self, id: CombatantId) -> Option<Combatant>;

    /// Submit a new initiative value. The value is stored as given, so
    /// non-integral and even NaN values pass through unchanged.
    fn set_initiative(&mut self, id: CombatantId, value: f64);

    /// Whether the current viewer holds GM-equivalent privilege over the
    /// encounter.
    fn is_gm(&self) -> bool;
}
