//! Value parsers and the dispatcher that picks one by its first character

pub mod boolean;
pub mod env;
pub mod number;
pub mod quoted;

pub use boolean::{parse_boolean, BoolFirst};
pub use env::parse_env;
pub use number::{parse_number, FirstCharacter, NumberOutput};
pub use quoted::parse_quoted_string;

use super::ast::KVValue;
use super::diagnostic::{Diagnostic, NumberProblem, ValueProblem};
use super::result::ParseResult;
use crate::lexer::SourceCursor;

/// Parse the value under the cursor.
///
/// `"` starts a quoted string, `+ - .` or a digit a number, `t`/`f` (either
/// case) a boolean and `e` an `env(...)` reference. On success the cursor is
/// on the character right after the value.
pub fn parse_value(cursor: &mut SourceCursor<'_>) -> ParseResult<KVValue> {
    let start = cursor.position();
    let Some(c) = cursor.current() else {
        return ParseResult::failure(cursor.error(ValueProblem::EndOfStream));
    };

    if let Some(first) = FirstCharacter::classify(c) {
        let result = parse_number(cursor, first);
        let demoted = first == FirstCharacter::Dot
            && matches!(result.value(), Some(NumberOutput::Integer(_)));
        let result = result.map(|n| match n {
            NumberOutput::Integer(i) => KVValue::Integer(i),
            NumberOutput::Double(d) => KVValue::Number(d),
        });
        return if demoted {
            result.with_leading(vec![Diagnostic::warning(
                NumberProblem::IntegerInsteadOfDouble,
                start,
            )])
        } else {
            result
        };
    }

    match c {
        '"' => parse_quoted_string(cursor).map(KVValue::QuotedString),
        't' | 'T' => parse_boolean(cursor, BoolFirst::T).map(KVValue::Boolean),
        'f' | 'F' => parse_boolean(cursor, BoolFirst::F).map(KVValue::Boolean),
        'e' => parse_env(cursor).map(KVValue::EnvRef),
        c => ParseResult::failure(cursor.error(ValueProblem::UnexpectedSymbol(c))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::diagnostic::{EnvProblem, Problem};

    fn parse(source: &str) -> ParseResult<KVValue> {
        parse_value(&mut SourceCursor::new(source))
    }

    #[test]
    fn test_dispatch_by_first_character() {
        assert_eq!(parse("\"x\""), ParseResult::success(KVValue::QuotedString("x".into())));
        assert_eq!(parse("-3"), ParseResult::success(KVValue::Integer(-3)));
        assert_eq!(parse("+3.5"), ParseResult::success(KVValue::Number(3.5)));
        assert_eq!(parse(".25"), ParseResult::success(KVValue::Number(0.25)));
        assert_eq!(parse("42 "), ParseResult::success(KVValue::Integer(42)));
        assert_eq!(parse("True"), ParseResult::success(KVValue::Boolean(true)));
        assert_eq!(parse("false\n"), ParseResult::success(KVValue::Boolean(false)));
        assert_eq!(parse("env(\"HOME\")"), ParseResult::success(KVValue::EnvRef("HOME".into())));
    }

    #[test]
    fn test_unknown_first_character() {
        let result = parse("yes");
        assert_eq!(
            result.diagnostics()[0].problem,
            Problem::Value(ValueProblem::UnexpectedSymbol('y'))
        );
        assert_eq!(result.diagnostics()[0].column, 1);

        let result = parse("Env(\"A\")");
        assert_eq!(
            result.diagnostics()[0].problem,
            Problem::Value(ValueProblem::UnexpectedSymbol('E'))
        );
    }

    #[test]
    fn test_end_of_stream() {
        assert_eq!(
            parse("").diagnostics()[0].problem,
            Problem::Value(ValueProblem::EndOfStream)
        );
    }

    #[test]
    fn test_inner_diagnostics_keep_their_origin() {
        let result = parse("env(x)");
        assert_eq!(
            result.diagnostics()[0].problem,
            Problem::Env(EnvProblem::UnexpectedSymbol('x'))
        );
    }
}
