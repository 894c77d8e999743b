//! Terminal host application.
//!
//! Single-view Elm-style loop: render, poll, update. The point of the host
//! is to feed the tracker controller the same render/input surface a real
//! deployment would deliver, so the controller never learns it is running
//! in a terminal.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use rand::Rng;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};

use crate::config::AppConfig;
use crate::host::{CombatantId, Encounter, LocalEncounter};
use crate::tracker::{DropTarget, FieldKey, InitiativeField, TrackerController};
use crate::tui::adapter::{self, ListHit, RowZone, SchemaFlavor, INIT_COL_W, ROLL_COL_W};
use crate::tui::theme;

/// Two primary clicks on the same entry inside this window count as a
/// double click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

const LOG_CAP: usize = 200;

/// Roster used when the config file provides none.
const DEFAULT_ROSTER: &[(&str, Option<f64>, bool)] = &[
    ("Shieldmaiden", Some(18.0), true),
    ("Torchbearer", Some(11.0), true),
    ("Goblin Archer", Some(14.0), false),
    ("Goblin Warg", None, false),
    ("Cave Troll", Some(7.0), false),
];

#[derive(Debug, Clone, Copy)]
struct Press {
    id: CombatantId,
}

pub struct AppState {
    config: AppConfig,
    encounter: LocalEncounter,
    controller: TrackerController,
    flavor: SchemaFlavor,
    /// Encounter revision the current bindings were built from. `None`
    /// forces a rebind on the next turn.
    seen_revision: Option<u64>,
    /// Render order of the last bind, for index/id mapping.
    order: Vec<CombatantId>,
    cursor: usize,
    scroll: usize,
    viewport: Rect,
    press: Option<Press>,
    last_click: Option<(Instant, CombatantId)>,
    drag_hover: Option<ListHit>,
    sheet: Option<CombatantId>,
    log: Vec<String>,
    running: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut encounter = LocalEncounter::new();
        if config.host.roster.is_empty() {
            for &(name, initiative, owner) in DEFAULT_ROSTER {
                encounter.recruit(name, initiative, owner);
            }
        } else {
            for entry in &config.host.roster {
                encounter.recruit(&entry.name, entry.initiative, entry.owner);
            }
        }
        let flavor = SchemaFlavor::from_config(&config.host.schema);
        Self {
            config,
            encounter,
            controller: TrackerController::new(),
            flavor,
            seen_revision: None,
            order: Vec::new(),
            cursor: 0,
            scroll: 0,
            viewport: Rect::default(),
            press: None,
            last_click: None,
            drag_hover: None,
            sheet: None,
            log: Vec::new(),
            running: true,
        }
    }

    // ── Event loop ──────────────────────────────────────────────────────

    /// Main loop: pump, render, poll input.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let tick = Duration::from_millis(self.config.tui.tick_rate_ms);
        while self.running {
            self.pump();
            let size = terminal.size()?;
            self.viewport = Rect::new(0, 0, size.width, size.height);
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// One non-input turn: rebind if the encounter changed, then advance
    /// the deferred-focus queue.
    fn pump(&mut self) {
        self.refresh_bindings();
        if let Some(id) = self.controller.poll_deferred(&mut self.encounter) {
            self.focus_cursor(id);
            let line = format!("{} ready to edit", self.name_of(id));
            self.push_log(line);
        }
    }

    fn refresh_bindings(&mut self) {
        let revision = self.encounter.revision();
        if self.seen_revision == Some(revision) {
            return;
        }
        let markup = adapter::build_markup(&self.encounter, self.flavor);
        self.controller.on_list_rendered(&markup, &self.encounter);
        self.order = self
            .controller
            .bindings()
            .order
            .iter()
            .map(|e| e.id)
            .collect();
        self.seen_revision = Some(revision);
        self.clamp_cursor();
        if let Some(id) = self.sheet {
            if self.encounter.combatant(id).is_none() {
                self.sheet = None;
            }
        }
    }

    // ── Keyboard ────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        if self.sheet.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'd')) {
                self.sheet = None;
            }
            return;
        }
        if self.controller.edit().is_some() {
            self.handle_edit_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('g') => self.toggle_gm(),
            KeyCode::Char('s') => self.toggle_schema(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter => self.focus_selected(),
            KeyCode::Char('r') => self.quick_roll_selected(),
            KeyCode::Char('R') => {
                if let Some(id) = self.id_at(self.cursor) {
                    self.host_roll(id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.id_at(self.cursor) {
                    self.sheet = Some(id);
                }
            }
            KeyCode::Char('x') => self.dismiss_selected(),
            _ => {}
        }
    }

    /// A focused field consumes every keystroke, so none of the shortcuts
    /// above can fire mid-edit.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            // Confirm and plain focus loss are the same submit path.
            KeyCode::Enter | KeyCode::Esc => {
                let id = self.controller.edit().map(|s| s.id);
                self.controller.on_field_commit(&mut self.encounter);
                if let Some(id) = id {
                    self.log_commit(id);
                }
            }
            KeyCode::Char(c) => {
                self.controller.on_field_key(FieldKey::Char(c));
            }
            KeyCode::Backspace => {
                self.controller.on_field_key(FieldKey::Backspace);
            }
            KeyCode::Delete => {
                self.controller.on_field_key(FieldKey::Delete);
            }
            KeyCode::Left => {
                self.controller.on_field_key(FieldKey::Left);
            }
            KeyCode::Right => {
                self.controller.on_field_key(FieldKey::Right);
            }
            KeyCode::Home => {
                self.controller.on_field_key(FieldKey::Home);
            }
            KeyCode::End => {
                self.controller.on_field_key(FieldKey::End);
            }
            _ => {}
        }
    }

    // ── Mouse ───────────────────────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_primary_down(mouse.column, mouse.row)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.on_primary_drag(mouse.column, mouse.row)
            }
            MouseEventKind::Up(MouseButton::Left) => self.on_primary_up(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Right) => {
                self.on_secondary_down(mouse.column, mouse.row)
            }
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            _ => {}
        }
    }

    fn on_primary_down(&mut self, column: u16, row: u16) {
        if self.sheet.take().is_some() {
            return;
        }
        let hit = self.hit(column, row);
        self.blur_if_outside_field(hit);
        self.press = None;
        if let Some(ListHit::Entry(index, _)) = hit {
            self.cursor = index;
            // The blur above may already have reshuffled the encounter,
            // while the rows only move on the next render. Pin the
            // combatant drawn under the pointer, not its row position.
            if let Some(id) = self.id_at(index) {
                self.press = Some(Press { id });
            }
        }
    }

    fn on_primary_drag(&mut self, column: u16, row: u16) {
        let hit = self.hit(column, row);
        if self.controller.drag().is_none() {
            let Some(press) = self.press else { return };
            if !self.controller.on_drag_start(press.id) {
                return;
            }
            let line = format!("dragging {}", self.name_of(press.id));
            self.push_log(line);
        }
        let hover = hit.filter(|&h| {
            self.drop_target_at(Some(h))
                .is_some_and(|t| self.controller.on_drag_over(t))
        });
        self.drag_hover = hover;
    }

    fn on_primary_up(&mut self, column: u16, row: u16) {
        let hit = self.hit(column, row);

        if let Some(dragged) = self.controller.drag() {
            // Releases outside the list never fire a drop; the session
            // just ends.
            if let Some(target) = self.drop_target_at(hit) {
                let before = self.encounter.revision();
                self.controller.on_drop(target, &mut self.encounter);
                let line = if self.encounter.revision() != before {
                    let value = self.encounter.combatant(dragged).and_then(|c| c.initiative);
                    format!(
                        "{} dropped to initiative {}",
                        self.name_of(dragged),
                        value.map(|v| v.to_string()).unwrap_or_default()
                    )
                } else {
                    "drop changed nothing".to_string()
                };
                self.push_log(line);
            }
            self.controller.on_drag_end();
            self.drag_hover = None;
            self.press = None;
            return;
        }

        let Some(press) = self.press.take() else { return };
        let Some(ListHit::Entry(index, zone)) = hit else {
            self.last_click = None;
            return;
        };
        // Press and release must land on the same combatant to count as
        // a click, even if a mid-gesture commit moved its row.
        if self.id_at(index) != Some(press.id) {
            self.last_click = None;
            return;
        }
        let id = press.id;

        let now = Instant::now();
        let is_double = self
            .last_click
            .take()
            .is_some_and(|(at, last)| last == id && now.duration_since(at) < DOUBLE_CLICK_WINDOW);
        if is_double {
            // Editable cells and the roll control consume their clicks, so
            // a double click there never reaches the row's sheet-opening
            // default.
            let consumed = zone == RowZone::Roll
                || (zone == RowZone::Initiative && self.controller.bindings().is_editable(id));
            if !consumed {
                self.sheet = Some(id);
            }
            return;
        }
        self.last_click = Some((now, id));

        match zone {
            RowZone::Initiative => {
                let _ = self.controller.on_field_focus(id, &mut self.encounter);
            }
            RowZone::Roll => self.host_roll(id),
            RowZone::Name => {}
        }
    }

    fn on_secondary_down(&mut self, column: u16, row: u16) {
        if self.sheet.take().is_some() {
            return;
        }
        let hit = self.hit(column, row);
        self.blur_if_outside_field(hit);
        let Some(ListHit::Entry(index, RowZone::Roll)) = hit else {
            return;
        };
        let Some(id) = self.id_at(index) else { return };
        if self.controller.on_roll_context_menu(id, &mut self.encounter) {
            let line = format!("{} set to 0, queued for edit", self.name_of(id));
            self.push_log(line);
        }
    }

    /// Pointer presses outside the focused field blur it before anything
    /// else runs, matching the host's focus rules.
    fn blur_if_outside_field(&mut self, hit: Option<ListHit>) {
        let Some(session_id) = self.controller.edit().map(|s| s.id) else {
            return;
        };
        let inside = matches!(
            hit,
            Some(ListHit::Entry(index, RowZone::Initiative))
                if self.id_at(index) == Some(session_id)
        );
        if !inside {
            self.controller.on_field_blur(&mut self.encounter);
            self.log_commit(session_id);
        }
    }

    // ── Actions ─────────────────────────────────────────────────────────

    fn toggle_gm(&mut self) {
        let gm = !self.encounter.is_gm();
        self.encounter.set_gm(gm);
        self.push_log(if gm {
            "viewing as GM".to_string()
        } else {
            "viewing as player".to_string()
        });
    }

    fn toggle_schema(&mut self) {
        self.flavor = self.flavor.toggle();
        // Same roster, different markup: force a rebind.
        self.seen_revision = None;
        self.push_log(format!("host renders {} markup now", self.flavor.name()));
    }

    fn focus_selected(&mut self) {
        let Some(id) = self.id_at(self.cursor) else { return };
        if !self.controller.on_field_focus(id, &mut self.encounter) {
            let line = format!("{}: not editable for this viewer", self.name_of(id));
            self.push_log(line);
        }
    }

    fn quick_roll_selected(&mut self) {
        let Some(id) = self.id_at(self.cursor) else { return };
        if self.controller.on_roll_context_menu(id, &mut self.encounter) {
            let line = format!("{} set to 0, queued for edit", self.name_of(id));
            self.push_log(line);
        } else {
            let line = format!("{}: no quick roll for this viewer", self.name_of(id));
            self.push_log(line);
        }
    }

    fn dismiss_selected(&mut self) {
        if !self.encounter.is_gm() {
            self.push_log("only the GM dismisses combatants".to_string());
            return;
        }
        let Some(id) = self.id_at(self.cursor) else { return };
        let line = format!("{} dismissed", self.name_of(id));
        self.encounter.dismiss(id);
        self.push_log(line);
    }

    /// The host's own roll button behavior: a plain d20. The tracker only
    /// intercepts secondary activation, so primary clicks land here.
    fn host_roll(&mut self, id: CombatantId) {
        let roll = rand::thread_rng().gen_range(1..=20) as f64;
        self.encounter.set_initiative(id, roll);
        let line = format!("{} rolls {roll}", self.name_of(id));
        self.push_log(line);
    }

    fn log_commit(&mut self, id: CombatantId) {
        let value = self
            .encounter
            .combatant(id)
            .and_then(|c| c.initiative)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let line = format!("{} initiative committed: {value}", self.name_of(id));
        self.push_log(line);
    }

    // ── Geometry and lookups ────────────────────────────────────────────

    fn screen(&self, area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(7),
            Constraint::Length(3),
        ])
        .areas(area)
    }

    fn list_inner(&self) -> Rect {
        self.screen(self.viewport)[1].inner(Margin::new(1, 1))
    }

    fn hit(&self, column: u16, row: u16) -> Option<ListHit> {
        adapter::hit_list(self.list_inner(), self.scroll, self.order.len(), column, row)
    }

    fn id_at(&self, index: usize) -> Option<CombatantId> {
        self.order.get(index).copied()
    }

    fn drop_target_at(&self, hit: Option<ListHit>) -> Option<DropTarget> {
        match hit? {
            ListHit::Entry(index, _) => self.id_at(index).map(DropTarget::Entry),
            ListHit::Tail => Some(DropTarget::ListEnd),
        }
    }

    fn name_of(&self, id: CombatantId) -> String {
        self.encounter
            .combatant(id)
            .map(|c| c.name)
            .unwrap_or_else(|| id.to_string())
    }

    fn focus_cursor(&mut self, id: CombatantId) {
        if let Some(index) = self.order.iter().position(|&o| o == id) {
            self.cursor = index;
            self.ensure_cursor_visible();
        }
    }

    fn move_cursor(&mut self, delta: i64) {
        if self.order.is_empty() {
            return;
        }
        let max = (self.order.len() - 1) as i64;
        self.cursor = (self.cursor as i64 + delta).clamp(0, max) as usize;
        self.ensure_cursor_visible();
    }

    fn scroll_by(&mut self, delta: i64) {
        let visible = self.list_inner().height as usize;
        let max = self.order.len().saturating_sub(visible);
        self.scroll = (self.scroll as i64 + delta).clamp(0, max as i64) as usize;
    }

    fn clamp_cursor(&mut self) {
        if self.order.is_empty() {
            self.cursor = 0;
            self.scroll = 0;
            return;
        }
        self.cursor = self.cursor.min(self.order.len() - 1);
        self.ensure_cursor_visible();
    }

    fn ensure_cursor_visible(&mut self) {
        let visible = self.list_inner().height.max(1) as usize;
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + visible {
            self.scroll = self.cursor + 1 - visible;
        }
    }

    fn push_log(&mut self, line: String) {
        log::info!("{line}");
        self.log.push(line);
        if self.log.len() > LOG_CAP {
            let excess = self.log.len() - LOG_CAP;
            self.log.drain(..excess);
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let [header, list, log, footer] = self.screen(frame.area());
        self.render_header(frame, header);
        self.render_tracker(frame, list);
        self.render_log(frame, log);
        self.render_footer(frame, footer);
        if let Some(id) = self.sheet {
            self.render_sheet(frame, frame.area(), id);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let badge = if self.encounter.is_gm() {
            Span::styled(" GM ", theme::gm_badge())
        } else {
            Span::styled(" PLAYER ", theme::player_badge())
        };
        let line = Line::from(vec![
            Span::styled(" easyinit ", theme::title()),
            Span::styled("combat tracker  ", theme::muted()),
            badge,
            Span::styled(format!("  markup:{}", self.flavor.name()), theme::muted()),
            Span::styled(format!("  {} combatants", self.order.len()), theme::muted()),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_default());
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_tracker(&self, frame: &mut Frame, area: Rect) {
        let dragging = self.controller.drag();
        let tail_hover = matches!(self.drag_hover, Some(ListHit::Tail));
        let block = if tail_hover {
            theme::block_focused("Initiative")
        } else {
            theme::block_default("Initiative")
        };
        frame.render_widget(block, area);

        let inner = area.inner(Margin::new(1, 1));
        let visible = inner.height as usize;
        let ordered = self.encounter.ordered();
        let lines: Vec<Line> = ordered
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible)
            .map(|(index, combatant)| {
                self.entry_line(index, combatant.id, &combatant.name, combatant.is_owner, dragging)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn entry_line(
        &self,
        index: usize,
        id: CombatantId,
        name: &str,
        is_owner: bool,
        dragging: Option<CombatantId>,
    ) -> Line<'static> {
        let entry = self.controller.bindings().entry(id);
        let mut spans = Vec::new();

        // Roll column, dimmed when only the host default applies.
        let roll_style = if entry.is_some_and(|e| e.roll) {
            Style::default().fg(theme::WARNING)
        } else {
            theme::dim()
        };
        spans.push(Span::styled(
            format!("{:<width$}", "d20", width = ROLL_COL_W as usize),
            roll_style,
        ));

        // Initiative column: the live edit buffer when focused here.
        match self.controller.edit().filter(|s| s.id == id) {
            Some(session) => spans.extend(field_spans(&session.field)),
            None => {
                let text = self
                    .encounter
                    .combatant(id)
                    .map(|c| adapter::initiative_text(&c))
                    .unwrap_or_default();
                let style = if text == "NaN" {
                    Style::default().fg(theme::ERROR)
                } else if text.is_empty() {
                    theme::dim()
                } else {
                    theme::initiative()
                };
                spans.push(Span::styled(
                    format!("{:>width$} ", text, width = (INIT_COL_W - 1) as usize),
                    style,
                ));
            }
        }

        let name_style = if is_owner {
            Style::default().fg(theme::ACCENT_SOFT)
        } else {
            Style::default().fg(theme::TEXT)
        };
        spans.push(Span::styled(name.to_string(), name_style));

        let line = Line::from(spans);
        if dragging == Some(id) {
            line.style(theme::drag_source())
        } else if matches!(self.drag_hover, Some(ListHit::Entry(i, _)) if i == index) {
            line.style(theme::drop_hint())
        } else if index == self.cursor {
            line.style(theme::highlight())
        } else {
            line
        }
    }

    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let height = area.height.saturating_sub(2) as usize;
        let start = self.log.len().saturating_sub(height);
        let lines: Vec<Line> = self.log[start..]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                // Newest echo pops, older history stays muted.
                let style = if start + offset + 1 == self.log.len() {
                    theme::event_echo()
                } else {
                    theme::muted()
                };
                Line::styled(format!(" {entry}"), style)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(theme::block_default("Events")),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.controller.edit().is_some() {
            &[
                ("enter", "commit"),
                ("esc", "commit"),
                ("←/→", "cursor"),
                ("type", "overwrite selection"),
            ]
        } else if self.encounter.is_gm() {
            &[
                ("j/k", "move"),
                ("enter", "edit"),
                ("r", "quick roll"),
                ("R", "roll d20"),
                ("drag", "reorder"),
                ("x", "dismiss"),
                ("g", "player view"),
                ("s", "markup"),
                ("q", "quit"),
            ]
        } else {
            &[
                ("j/k", "move"),
                ("enter", "edit own"),
                ("r", "quick roll"),
                ("d", "sheet"),
                ("g", "gm view"),
                ("s", "markup"),
                ("q", "quit"),
            ]
        };
        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(format!(" {key} "), theme::key_hint()));
            spans.push(Span::styled(format!("{label}  "), theme::muted()));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_default());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_sheet(&self, frame: &mut Frame, area: Rect, id: CombatantId) {
        let Some(combatant) = self.encounter.combatant(id) else {
            return;
        };
        let rect = centered(area, 44, 9);
        frame.render_widget(Clear, rect);
        let initiative = adapter::initiative_text(&combatant);
        let initiative = if initiative.is_empty() {
            "not rolled".to_string()
        } else {
            initiative
        };
        let lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("  Name        ", theme::muted()),
                Span::styled(combatant.name.clone(), theme::heading()),
            ]),
            Line::from(vec![
                Span::styled("  Initiative  ", theme::muted()),
                Span::raw(initiative),
            ]),
            Line::from(vec![
                Span::styled("  Control     ", theme::muted()),
                Span::raw(if combatant.is_owner {
                    "yours"
                } else {
                    "another player"
                }),
            ]),
            Line::from(vec![
                Span::styled("  Id          ", theme::muted()),
                Span::styled(combatant.id.to_string(), theme::dim()),
            ]),
            Line::raw(""),
            Line::styled("  esc to close", theme::key_hint()),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(theme::block_focused("Combatant")),
            rect,
        );
    }
}

/// Spans for the focused field: whole-value selection right after focus, a
/// block cursor once the selection collapses.
fn field_spans(field: &InitiativeField) -> Vec<Span<'static>> {
    let text = field.text().to_string();
    if field.is_all_selected() {
        return vec![
            Span::styled(text, theme::field_selection()),
            Span::raw(" ".to_string()),
        ];
    }
    let cursor = field.cursor_position();
    let before = text[..cursor].to_string();
    let (at, after) = match text[cursor..].chars().next() {
        Some(c) => {
            let end = cursor + c.len_utf8();
            (text[cursor..end].to_string(), text[end..].to_string())
        }
        None => (" ".to_string(), String::new()),
    };
    vec![
        Span::raw(before),
        Span::styled(at, theme::field_cursor()),
        Span::raw(after),
        Span::raw(" ".to_string()),
    ]
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
