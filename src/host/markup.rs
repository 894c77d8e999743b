//! Rendered-list markup snapshot.
//!
//! A minimal node tree mirroring what the host's renderer just produced:
//! class tokens, an optional backing combatant id, text content, children.
//! The binder walks the rows once per render and a schema adapter does the
//! structural addressing, so nothing outside this module assumes a
//! particular row layout.

use super::CombatantId;

/// One rendered element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    classes: String,
    combatant_id: Option<CombatantId>,
    text: String,
    children: Vec<Node>,
}

impl Node {
    /// New node carrying the given space-separated class tokens.
    pub fn new(classes: impl Into<String>) -> Self {
        Self {
            classes: classes.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_combatant(mut self, id: CombatantId) -> Self {
        self.combatant_id = Some(id);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Exact class-token match.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.split_whitespace().any(|c| c == class)
    }

    pub fn combatant_id(&self) -> Option<CombatantId> {
        self.combatant_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// First descendant (not self) matching the predicate, depth first.
    pub fn find_where<'a>(&'a self, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
        for child in &self.children {
            if pred(child) {
                return Some(child);
            }
            if let Some(hit) = child.find_where(pred) {
                return Some(hit);
            }
        }
        None
    }

    /// First descendant carrying the given class token, depth first.
    pub fn find(&self, class: &str) -> Option<&Node> {
        self.find_where(&|n| n.has_class(class))
    }
}

/// Snapshot of the whole rendered list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMarkup {
    children: Vec<Node>,
}

impl ListMarkup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.push(node);
        self
    }

    /// Top-level entry rows, in render order.
    pub fn rows(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| n.has_class("combatant"))
    }

    /// Whether any node in the tree carries the given class token. Used for
    /// capability probing before structural addressing.
    pub fn any_has_class(&self, class: &str) -> bool {
        self.children
            .iter()
            .any(|n| n.has_class(class) || n.find(class).is_some())
    }
}
