//! `//` and `///` comments

use super::diagnostic::CommentProblem;
use super::result::ParseResult;
use crate::lexer::SourceCursor;

/// Parse a comment starting at the `/` under the cursor.
///
/// Returns `Some(text)` for a `///` documentation comment, trimmed, and
/// `None` for a plain `//` comment. Either way the rest of the line and its
/// newline are consumed.
pub fn parse_comment(cursor: &mut SourceCursor<'_>) -> ParseResult<Option<String>> {
    debug_assert_eq!(cursor.current(), Some('/'));

    match cursor.advance() {
        None => return ParseResult::success(None),
        Some('/') => {}
        Some(c) => return ParseResult::failure(cursor.error(CommentProblem::UnexpectedSymbol(c))),
    }

    match cursor.advance() {
        None => ParseResult::success(None),
        Some('/') => {
            cursor.advance();
            let text = cursor.skip_line().trim();
            ParseResult::success(Some(text.to_string()))
        }
        Some(_) => {
            cursor.skip_line();
            ParseResult::success(None)
        }
    }
}
