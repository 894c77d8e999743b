//! Property-based tests for the inline edit buffer
//!
//! Tests invariants:
//! - The cursor always sits on a char boundary, whatever the edit script
//! - The first insertion after focus replaces the selected value outright
//! - Text without digits parses to the NaN sentinel
//! - Plain integers parse exactly

use proptest::prelude::*;

use crate::tracker::{parse_initiative, InitiativeField};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::char::range('0', '9').prop_map(Op::Insert),
        Just(Op::Insert('.')),
        Just(Op::Insert('-')),
        // Multibyte, to exercise the boundary arithmetic.
        Just(Op::Insert('µ')),
        Just(Op::Backspace),
        Just(Op::Delete),
        Just(Op::Left),
        Just(Op::Right),
        Just(Op::Home),
        Just(Op::End),
    ]
}

fn apply(field: &mut InitiativeField, op: Op) {
    match op {
        Op::Insert(c) => field.insert_char(c),
        Op::Backspace => field.backspace(),
        Op::Delete => field.delete(),
        Op::Left => field.move_left(),
        Op::Right => field.move_right(),
        Op::Home => field.move_home(),
        Op::End => field.move_end(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: no edit script parks the cursor off a char boundary.
    #[test]
    fn prop_cursor_stays_on_char_boundaries(
        initial in "[0-9]{0,4}",
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut field = InitiativeField::focused(initial);
        for op in ops {
            apply(&mut field, op);
            let cursor = field.cursor_position();
            prop_assert!(cursor <= field.text().len());
            prop_assert!(field.text().is_char_boundary(cursor));
        }
    }

    /// Property: with the whole value selected, the first insertion
    /// replaces it.
    #[test]
    fn prop_first_insert_replaces_selection(
        initial in "[0-9]{1,4}",
        c in prop::char::range('0', '9'),
    ) {
        let mut field = InitiativeField::focused(initial);
        prop_assert!(field.is_all_selected());
        field.insert_char(c);
        let expected = c.to_string();
        prop_assert_eq!(field.text(), expected.as_str());
    }

    /// Property: text with no digit anywhere yields the NaN sentinel.
    #[test]
    fn prop_garbage_parses_to_nan(text in "[ghjkmopqrsuvwxz ]{1,8}") {
        prop_assert!(parse_initiative(&text).is_nan());
    }

    /// Property: plain integers parse exactly.
    #[test]
    fn prop_integers_parse_exactly(value in -10_000i32..10_000) {
        prop_assert_eq!(parse_initiative(&value.to_string()), f64::from(value));
    }
}
