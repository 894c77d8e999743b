//! Centralized Ember & Slate color theme for the easyinit TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Ember — primary accent, focused borders, active gestures.
pub const PRIMARY: Color = Color::Rgb(0xD9, 0x6C, 0x2E);
/// Light ember — highlights, the entry under the pointer.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0xE8, 0x8A, 0x4A);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Slate blue — headings, initiative values.
pub const ACCENT: Color = Color::Rgb(0x7B, 0x9E, 0xB8);
/// Soft slate — secondary emphasis.
pub const ACCENT_SOFT: Color = Color::Rgb(0x9D, 0xB8, 0xCC);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Near-black base background.
pub const BG_BASE: Color = Color::Rgb(0x14, 0x12, 0x10);
/// Surface — elevated rows, modals.
pub const BG_SURFACE: Color = Color::Rgb(0x24, 0x20, 0x1C);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE4, 0xDE, 0xD4);
/// Muted text — secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x8A, 0x84, 0x7A);
/// Dim text — disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x55, 0x50, 0x48);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Error — failed parses, NaN initiative.
pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
/// Success — the newest event echo.
pub const SUCCESS: Color = Color::Rgb(0x8F, 0xB5, 0x6E);
/// Warning — unrolled combatants.
pub const WARNING: Color = Color::Rgb(0xE0, 0xA4, 0x58);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Title text (header bar, modal titles).
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Cursor row in the tracker list.
pub fn highlight() -> Style {
    Style::default().fg(TEXT).bg(BG_SURFACE)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Initiative value column.
pub fn initiative() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Whole-value selection inside a focused field.
pub fn field_selection() -> Style {
    Style::default().fg(BG_BASE).bg(ACCENT)
}

/// Cursor cell inside a focused field.
pub fn field_cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// The entry a drag session is carrying.
pub fn drag_source() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::ITALIC)
}

/// The entry currently accepting the drop.
pub fn drop_hint() -> Style {
    Style::default()
        .fg(PRIMARY_LIGHT)
        .add_modifier(Modifier::UNDERLINED)
}

/// Newest line in the event panel.
pub fn event_echo() -> Style {
    Style::default().fg(SUCCESS)
}

/// Status bar GM badge.
pub fn gm_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Status bar player badge.
pub fn player_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}
