//! Terminal adapter between the local encounter and the tracker.
//!
//! Builds the per-render markup snapshot the binder walks, in either of the
//! two supported row shapes, and maps pointer coordinates onto rows and row
//! zones for the event loop. Keeping both shapes here means the schema
//! probe runs against markup the detectors have genuinely different work to
//! do on.

use ratatui::layout::{Position, Rect};

use crate::host::{Combatant, ListMarkup, LocalEncounter, Node};

/// Fixed column widths of the tracker list, shared by rendering and hit
/// testing.
pub const ROLL_COL_W: u16 = 4;
pub const INIT_COL_W: u16 = 7;

/// Which row shape the terminal host renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFlavor {
    /// Initiative wrapped in `token-initiative`, controls grouped.
    Grouped,
    /// Legacy: cells sit directly under the row.
    Flat,
}

impl SchemaFlavor {
    pub fn from_config(name: &str) -> Self {
        match name {
            "flat" => Self::Flat,
            "grouped" => Self::Grouped,
            other => {
                log::warn!("unknown host.schema {other:?}, using grouped");
                Self::Grouped
            }
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Grouped => Self::Flat,
            Self::Flat => Self::Grouped,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Grouped => "grouped",
            Self::Flat => "flat",
        }
    }
}

/// Markup snapshot for the current roster, in the given row shape.
pub fn build_markup(combat: &LocalEncounter, flavor: SchemaFlavor) -> ListMarkup {
    let mut markup = ListMarkup::new();
    for combatant in combat.ordered() {
        markup.push(entry_row(&combatant, flavor));
    }
    markup
}

fn entry_row(combatant: &Combatant, flavor: SchemaFlavor) -> Node {
    let cell = Node::new("initiative").with_text(initiative_text(combatant));
    let roll = Node::new("combatant-control roll").with_text("d20");
    let row = Node::new("combatant").with_combatant(combatant.id);
    match flavor {
        SchemaFlavor::Grouped => row
            .with_child(Node::new("token-initiative").with_child(cell))
            .with_child(Node::new("combatant-controls").with_child(roll)),
        SchemaFlavor::Flat => row.with_child(cell).with_child(roll),
    }
}

/// Text shown in the initiative cell. Unset renders blank; everything else
/// uses `f64`'s shortest display form, NaN included.
pub fn initiative_text(combatant: &Combatant) -> String {
    combatant
        .initiative
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Zones inside one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowZone {
    Roll,
    Initiative,
    Name,
}

/// What a pointer position lands on inside the tracker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    /// A rendered entry, by index into the current render order.
    Entry(usize, RowZone),
    /// Inside the list but past the last entry.
    Tail,
}

/// Map a pointer position onto the list. `inner` is the list's inner area,
/// `scroll` the first visible index, `len` the rendered entry count.
pub fn hit_list(inner: Rect, scroll: usize, len: usize, column: u16, row: u16) -> Option<ListHit> {
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let index = scroll + (row - inner.y) as usize;
    if index >= len {
        return Some(ListHit::Tail);
    }
    let x = column - inner.x;
    let zone = if x < ROLL_COL_W {
        RowZone::Roll
    } else if x < ROLL_COL_W + INIT_COL_W {
        RowZone::Initiative
    } else {
        RowZone::Name
    };
    Some(ListHit::Entry(index, zone))
}
