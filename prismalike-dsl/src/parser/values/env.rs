//! `env("NAME")` references

use super::quoted::parse_quoted_string;
use crate::lexer::SourceCursor;
use crate::parser::diagnostic::{Diagnostic, EnvProblem, Problem};
use crate::parser::result::ParseResult;

/// Parse `env(` + optional spaces + quoted name + optional spaces + `)`.
///
/// The cursor starts on the `e`. After the `)` a space, `/`, newline, `}` or
/// end of stream must follow; it is left under the cursor. Diagnostics from
/// the nested quoted string are re-tagged as [`EnvProblem::QuotedString`].
pub fn parse_env(cursor: &mut SourceCursor<'_>) -> ParseResult<String> {
    debug_assert_eq!(cursor.current(), Some('e'));

    for expected in "nv(".chars() {
        match cursor.advance() {
            None => return ParseResult::failure(cursor.error(EnvProblem::EndOfStream)),
            Some(c) if c == expected => {}
            Some(c) => return ParseResult::failure(cursor.error(EnvProblem::UnexpectedSymbol(c))),
        }
    }

    cursor.advance();
    match cursor.skip_whitespace() {
        None => return ParseResult::failure(cursor.error(EnvProblem::EndOfStream)),
        Some('"') => {}
        Some(c) => return ParseResult::failure(cursor.error(EnvProblem::UnexpectedSymbol(c))),
    }

    let mut diagnostics = Vec::new();
    let Some(name) = parse_quoted_string(cursor)
        .map_diagnostics(wrap_quoted)
        .record(&mut diagnostics)
    else {
        return ParseResult::failure_with(diagnostics);
    };

    match cursor.skip_whitespace() {
        None => {
            diagnostics.push(cursor.error(EnvProblem::EndOfStream));
            return ParseResult::failure_with(diagnostics);
        }
        Some(')') => {}
        Some(c) => {
            diagnostics.push(cursor.error(EnvProblem::UnexpectedSymbol(c)));
            return ParseResult::failure_with(diagnostics);
        }
    }

    match cursor.advance() {
        None | Some(' ' | '/' | '\n' | '}') => ParseResult::success_with(name, diagnostics),
        Some(c) => {
            diagnostics.push(cursor.error(EnvProblem::UnexpectedSymbol(c)));
            ParseResult::failure_with(diagnostics)
        }
    }
}

fn wrap_quoted(diagnostic: Diagnostic) -> Diagnostic {
    match diagnostic.problem {
        Problem::QuotedString(inner) => Diagnostic {
            problem: EnvProblem::QuotedString(inner).into(),
            ..diagnostic
        },
        _ => diagnostic,
    }
}
