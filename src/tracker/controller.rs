//! Session-scoped tracker controller.
//!
//! One controller per tracked list. It owns the two single-slot states
//! (pending edit marker, drag session), the active inline edit, and the
//! deferred-focus queue. The host adapter delivers render notifications
//! and input events, and honors the returned suppression flags; all
//! encounter mutations funnel through here.

use tracing::{debug, trace};

use crate::host::{markup::ListMarkup, schema, CombatantId, Encounter};

use super::binder::{bind_list, ListBindings};
use super::field::{parse_initiative, InitiativeField};
use super::reorder::{resolve_drop, DropTarget};

/// Keystrokes routed to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Active inline edit of one combatant's initiative.
#[derive(Debug)]
pub struct EditSession {
    pub id: CombatantId,
    pub field: InitiativeField,
}

#[derive(Debug, Clone, Copy)]
struct DeferredFocus {
    id: CombatantId,
    /// Whole event-loop turns left before the grant fires.
    turns: u8,
}

#[derive(Debug, Default)]
pub struct TrackerController {
    pending_edit: Option<CombatantId>,
    drag: Option<CombatantId>,
    edit: Option<EditSession>,
    deferred: Option<DeferredFocus>,
    bindings: ListBindings,
}

impl TrackerController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Render binding ──────────────────────────────────────────────────

    /// Entry point for the host's render notification. Re-walks the list,
    /// records fresh bindings, and schedules a deferred focus grant when
    /// the pending edit marker matches an editable entry.
    pub fn on_list_rendered(&mut self, markup: &ListMarkup, combat: &dyn Encounter) {
        let schema = schema::detect(markup);
        debug!(
            schema = schema.name(),
            rows = markup.rows().count(),
            "binding combat list"
        );
        self.bindings = bind_list(markup, schema, combat);

        // The render replaced every cell, so a focused field no longer
        // exists. It never blurred, so nothing is submitted.
        if let Some(session) = self.edit.take() {
            debug!(combatant = %session.id, "edit lost to re-render");
        }

        if let Some(id) = self.pending_edit {
            if self.bindings.is_editable(id) {
                debug!(combatant = %id, "deferring focus grant");
                self.deferred = Some(DeferredFocus { id, turns: 1 });
            }
        }
    }

    /// Wiring decided by the last render.
    pub fn bindings(&self) -> &ListBindings {
        &self.bindings
    }

    // ── Deferred focus ──────────────────────────────────────────────────

    /// Advance the deferred-focus queue by one event-loop turn. Called once
    /// per turn by the host.
    ///
    /// When the deferral matures, the marker and the target entry are
    /// validated again; if either moved on, the grant is skipped silently.
    /// Returns the focused id when an edit session was started, so the host
    /// can move its cursor along.
    pub fn poll_deferred(&mut self, combat: &mut dyn Encounter) -> Option<CombatantId> {
        {
            let deferred = self.deferred.as_mut()?;
            if deferred.turns > 0 {
                deferred.turns -= 1;
                return None;
            }
        }
        let DeferredFocus { id, .. } = self.deferred.take()?;
        if self.pending_edit != Some(id) {
            debug!(combatant = %id, "deferred focus dropped: marker moved on");
            return None;
        }
        let Some(initial) = self.field_initial(id) else {
            debug!(combatant = %id, "deferred focus dropped: entry no longer editable");
            self.pending_edit = None;
            return None;
        };
        self.pending_edit = None;
        if self.edit.is_some() {
            self.on_field_blur(combat);
        }
        self.begin_edit(id, initial);
        Some(id)
    }

    /// Combatant marked for auto-focus after the next render, if any.
    pub fn pending_edit(&self) -> Option<CombatantId> {
        self.pending_edit
    }

    // ── Editable field lifecycle ────────────────────────────────────────

    /// Viewer focused an editable initiative cell. Returns whether the
    /// focus was accepted, in which case ancestor click handling must be
    /// suppressed.
    pub fn on_field_focus(&mut self, id: CombatantId, combat: &mut dyn Encounter) -> bool {
        if self.edit.as_ref().map(|s| s.id) == Some(id) {
            return true;
        }
        let Some(initial) = self.field_initial(id) else {
            return false;
        };
        // Focus moving between fields blurs the old one first.
        if self.edit.is_some() {
            self.on_field_blur(combat);
        }
        self.begin_edit(id, initial);
        true
    }

    /// The active edit session, if any.
    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Route a keystroke to the focused field. Consumed whenever a session
    /// is active, so host shortcuts never fire mid-edit.
    pub fn on_field_key(&mut self, key: FieldKey) -> bool {
        let Some(session) = self.edit.as_mut() else {
            return false;
        };
        match key {
            FieldKey::Char(c) => session.field.insert_char(c),
            FieldKey::Backspace => session.field.backspace(),
            FieldKey::Delete => session.field.delete(),
            FieldKey::Left => session.field.move_left(),
            FieldKey::Right => session.field.move_right(),
            FieldKey::Home => session.field.move_home(),
            FieldKey::End => session.field.move_end(),
        }
        true
    }

    /// Confirm keystroke on the focused field. Drops focus, which is the
    /// single submit trigger. Returns whether the event was consumed.
    pub fn on_field_commit(&mut self, combat: &mut dyn Encounter) -> bool {
        if self.edit.is_none() {
            return false;
        }
        self.on_field_blur(combat);
        true
    }

    /// The focused field lost focus: parse whatever it holds and submit,
    /// exactly once. Unparseable text submits the NaN sentinel unchanged.
    /// Clears the pending edit marker.
    pub fn on_field_blur(&mut self, combat: &mut dyn Encounter) {
        let Some(session) = self.edit.take() else {
            return;
        };
        let value = parse_initiative(session.field.text());
        debug!(combatant = %session.id, value, "blur submits initiative");
        combat.set_initiative(session.id, value);
        self.pending_edit = None;
    }

    // ── Quick roll ──────────────────────────────────────────────────────

    /// Secondary activation (right-click) on an entry's roll control:
    /// submit zero now and mark the combatant so the re-render this causes
    /// focuses its field. Returns whether default handling must be
    /// suppressed.
    pub fn on_roll_context_menu(&mut self, id: CombatantId, combat: &mut dyn Encounter) -> bool {
        if !self.bindings.entry(id).is_some_and(|e| e.roll) {
            return false;
        }
        // Any active edit blurs before the marker is replaced, so its blur
        // cannot clear the marker being set here.
        if self.edit.is_some() {
            self.on_field_blur(combat);
        }
        debug!(combatant = %id, "quick roll: submitting 0 and marking for edit");
        combat.set_initiative(id, 0.0);
        self.pending_edit = Some(id);
        true
    }

    // ── Drag session ────────────────────────────────────────────────────

    /// Drag gesture began on an entry. Only entries bound as drag sources
    /// open a session.
    pub fn on_drag_start(&mut self, id: CombatantId) -> bool {
        if !self.bindings.entry(id).is_some_and(|e| e.drag_source) {
            return false;
        }
        debug!(combatant = %id, "drag session opens");
        self.drag = Some(id);
        true
    }

    /// Whether the position under the pointer accepts a drop right now.
    /// True exactly while a session is active.
    pub fn on_drag_over(&self, _target: DropTarget) -> bool {
        self.drag.is_some()
    }

    /// Drop gesture. Without a session the event is ignored and default
    /// handling proceeds. With one, default handling is suppressed and the
    /// resolved value, if any, is submitted before returning, so a
    /// drag-end arriving next cannot race the mutation.
    pub fn on_drop(&mut self, target: DropTarget, combat: &mut dyn Encounter) -> bool {
        let Some(dragged) = self.drag else {
            return false;
        };
        match resolve_drop(dragged, target, &self.bindings.order) {
            Some(value) => {
                debug!(combatant = %dragged, value, "drop resolves");
                combat.set_initiative(dragged, value);
            }
            None => trace!(combatant = %dragged, "drop is a no-op"),
        }
        true
    }

    /// Drag gesture ended, dropped or not. Always closes the session.
    pub fn on_drag_end(&mut self) {
        if self.drag.take().is_some() {
            trace!("drag session closes");
        }
    }

    /// Combatant currently being dragged, if any.
    pub fn drag(&self) -> Option<CombatantId> {
        self.drag
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn field_initial(&self, id: CombatantId) -> Option<String> {
        self.bindings
            .entry(id)
            .and_then(|e| e.field.as_ref())
            .map(|f| f.initial.clone())
    }

    fn begin_edit(&mut self, id: CombatantId, initial: String) {
        debug!(combatant = %id, "edit begins");
        self.edit = Some(EditSession {
            id,
            field: InitiativeField::focused(initial),
        });
    }
}
