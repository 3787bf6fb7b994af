//! Boolean values

use crate::lexer::SourceCursor;
use crate::parser::diagnostic::BoolProblem;
use crate::parser::result::ParseResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolFirst {
    T,
    F,
}

/// Parse `true` or `false` in any letter case. The first letter is already
/// under the cursor.
///
/// The literal must be followed by a space, `/`, newline or end of stream.
/// That terminator is left under the cursor.
pub fn parse_boolean(cursor: &mut SourceCursor<'_>, first: BoolFirst) -> ParseResult<bool> {
    let (rest, value) = match first {
        BoolFirst::T => ("rue", true),
        BoolFirst::F => ("alse", false),
    };

    for expected in rest.chars() {
        match cursor.advance() {
            None => return ParseResult::failure(cursor.error(BoolProblem::EndOfStream)),
            Some(c) if c == expected || c == expected.to_ascii_uppercase() => {}
            Some(c) => return ParseResult::failure(cursor.error(BoolProblem::UnexpectedSymbol(c))),
        }
    }

    match cursor.advance() {
        None | Some(' ' | '/' | '\n') => ParseResult::success(value),
        Some(c) => ParseResult::failure(cursor.error(BoolProblem::UnexpectedSymbol(c))),
    }
}
