/// easyinit - editable initiative and drag-to-reorder for combat tracker lists.
///
/// Core library providing the list binder, reorder resolver, and edit/drag
/// session controller, plus the host boundary (markup snapshots, schema
/// adapters, encounter access) and a reference terminal host.

pub mod config;
pub mod host;
pub mod logging;
pub mod tracker;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
