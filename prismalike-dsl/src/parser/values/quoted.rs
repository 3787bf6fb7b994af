//! Quoted string values

use crate::lexer::chars::{is_control, is_newline};
use crate::lexer::SourceCursor;
use crate::parser::diagnostic::{Diagnostic, QuotedStringProblem};
use crate::parser::result::ParseResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    PossiblyEscaped,
}

/// Parse a `"..."` literal. The cursor must be on the opening quote and ends
/// one character past the closing quote.
///
/// Only `\"` is an escape; any other backslash pair is kept verbatim.
/// Control characters are dropped and reported once, as a warning anchored
/// at the opening quote. A newline or end of stream before the closing quote
/// is fatal.
pub fn parse_quoted_string(cursor: &mut SourceCursor<'_>) -> ParseResult<String> {
    debug_assert_eq!(cursor.current(), Some('"'));

    let start = cursor.position();
    let mut state = State::Normal;
    let mut buffer = String::new();
    let mut control_seen = false;

    let leading = |control_seen: bool| -> Vec<Diagnostic> {
        if control_seen {
            vec![Diagnostic::warning(QuotedStringProblem::ControlCharacter, start)]
        } else {
            Vec::new()
        }
    };

    loop {
        let Some(c) = cursor.advance() else {
            return ParseResult::failure(cursor.error(QuotedStringProblem::EndOfStream))
                .with_leading(leading(control_seen));
        };

        if is_newline(c) {
            return ParseResult::failure(cursor.error(QuotedStringProblem::NewLine))
                .with_leading(leading(control_seen));
        }

        match state {
            State::Normal => match c {
                '\\' => state = State::PossiblyEscaped,
                '"' => {
                    cursor.advance();
                    return ParseResult::success_with(buffer, leading(control_seen));
                }
                c if is_control(c) => control_seen = true,
                c => buffer.push(c),
            },
            State::PossiblyEscaped => {
                state = State::Normal;
                match c {
                    '"' => buffer.push('"'),
                    c if is_control(c) => {
                        buffer.push('\\');
                        control_seen = true;
                    }
                    c => {
                        buffer.push('\\');
                        buffer.push(c);
                    }
                }
            }
        }
    }
}
