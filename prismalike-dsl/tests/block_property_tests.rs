//! Property-Based Tests for KV Block Round-Trip and Parser Robustness
//!
//! Property: For any block the printer can express, printing → parsing SHALL
//! produce an equal block with no diagnostics.
//!
//! This also validates:
//! - Parser never panics on arbitrary input
//! - Diagnostic positions are always 1-based
//! - Failures always carry at least one error, successes never do

use prismalike_dsl::pretty_printer::{pretty_print_body, round_trip};
use prismalike_dsl::*;
use proptest::prelude::*;

// ============================================================================
// ARBITRATORS
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}"
}

/// Strings without backslashes, control characters or newlines; those are
/// the ones the printer can reproduce exactly.
fn arb_safe_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,:;!?#@$%&*(){}<>=+\"'/-]{0,24}"
}

/// Trimmed single-line documentation text.
fn arb_comment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.,!?}{=\"/-]([a-zA-Z0-9 _.,!?}{=\"/-]{0,20}[a-zA-Z0-9_.,!?}{=\"/-])?"
}

fn arb_value() -> impl Strategy<Value = KVValue> {
    prop_oneof![
        arb_safe_string().prop_map(KVValue::QuotedString),
        any::<i64>().prop_map(KVValue::Integer),
        (-1.0e12f64..1.0e12f64).prop_map(KVValue::Number),
        any::<bool>().prop_map(KVValue::Boolean),
        arb_safe_string().prop_map(KVValue::EnvRef),
    ]
}

fn arb_line() -> impl Strategy<Value = KVLine> {
    (arb_key(), arb_value(), prop::collection::vec(arb_comment(), 0..3))
        .prop_map(|(key, value, comments)| KVLine::new(key, value).with_comments(comments))
}

fn arb_block() -> impl Strategy<Value = KVBlock> {
    (
        arb_key(),
        prop::collection::vec(arb_line(), 0..8),
        prop::collection::vec(arb_comment(), 0..3),
    )
        .prop_map(|(name, lines, comments)| KVBlock {
            name,
            lines,
            comments,
        })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Printing then parsing SHALL produce an equal block and no diagnostics
    #[test]
    fn prop_round_trip_preserves_block(block in arb_block()) {
        let result = round_trip(&block);
        prop_assert_eq!(
            result,
            ParseResult::success(block.clone()),
            "Printed:\n{}",
            pretty_print_body(&block)
        );
    }

    /// Property: The parser never panics and always reports a consistent result
    #[test]
    fn prop_parser_never_panics(source in "(?s).{0,200}") {
        let result = parse_block_str(&source, "b", Vec::new());

        for diagnostic in result.diagnostics() {
            prop_assert!(diagnostic.line >= 1, "Line should be >= 1");
            prop_assert!(diagnostic.column >= 1, "Column should be >= 1");
        }

        match &result {
            ParseResult::Success { diagnostics, .. } => {
                prop_assert!(diagnostics.iter().all(Diagnostic::is_warning));
            }
            ParseResult::Failure { diagnostics } => {
                prop_assert!(diagnostics.iter().any(Diagnostic::is_error));
            }
        }
    }

    /// Property: Grammar-shaped noise never panics either
    #[test]
    fn prop_parser_handles_grammar_noise(source in "[a-z =\"/}{.+\\-0-9()\n]{0,120}") {
        let result = parse_block_str(&source, "b", Vec::new());
        prop_assert!(result.is_success() || result.errors().count() >= 1);
    }

    /// Property: Cursor line/column agree with a count over the consumed text
    #[test]
    fn prop_cursor_position_matches_consumed_text(source in "(?s).{0,80}", steps in 0usize..100) {
        let mut cursor = SourceCursor::new(&source);
        for _ in 0..steps {
            cursor.advance();
        }

        let consumed = &source[..cursor.position().offset];
        let line = 1 + consumed.matches('\n').count();
        let column = 1 + consumed.rsplit('\n').next().map_or(0, |tail| tail.chars().count());

        prop_assert_eq!(cursor.line(), line);
        prop_assert_eq!(cursor.column(), column);
        prop_assert_eq!(cursor.at_end(), steps >= source.chars().count());
    }

    /// Property: restore() returns the cursor to an equivalent state
    #[test]
    fn prop_restore_is_exact(source in "[a-z \n]{0,60}", first in 0usize..40, second in 0usize..40) {
        let mut cursor = SourceCursor::new(&source);
        for _ in 0..first {
            cursor.advance();
        }
        let saved = cursor.position();
        let expected: Vec<Option<char>> = {
            let mut lookahead = cursor.clone();
            (0..second).map(|_| lookahead.advance()).collect()
        };

        for _ in 0..second {
            cursor.advance();
        }
        prop_assert!(cursor.restore(saved));

        prop_assert_eq!(cursor.position(), saved);
        let replay: Vec<Option<char>> = (0..second).map(|_| cursor.advance()).collect();
        prop_assert_eq!(replay, expected);
    }

    /// Property: Integers print and parse back exactly
    #[test]
    fn prop_integer_values_round_trip(n in any::<i64>()) {
        let source = format!("n = {}\n}}", n);
        let result = parse_block_str(&source, "b", Vec::new());
        prop_assert_eq!(
            result.value().and_then(|b| b.get("n")).and_then(|l| l.value.as_i64()),
            Some(n)
        );
    }
}
