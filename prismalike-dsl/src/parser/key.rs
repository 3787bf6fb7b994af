//! Keys and the `=` that ends them

use super::diagnostic::KeyProblem;
use super::result::ParseResult;
use crate::lexer::chars::{is_newline, is_space, is_word};
use crate::lexer::SourceCursor;

/// Parse a key whose first character `first` is under the cursor, through
/// the `=` sign. On success the cursor is right after the `=`.
pub fn parse_key(cursor: &mut SourceCursor<'_>, first: char) -> ParseResult<String> {
    let mut key = String::from(first);

    loop {
        let Some(c) = cursor.advance() else {
            return ParseResult::failure(cursor.error(KeyProblem::EndOfStream));
        };

        match c {
            '=' => break,
            c if is_word(c) => key.push(c),
            c if is_space(c) => match cursor.skip_whitespace() {
                Some('=') => break,
                Some(c) => {
                    return ParseResult::failure(cursor.error(KeyProblem::MissingEqualsSign(c)))
                }
                None => return ParseResult::failure(cursor.error(KeyProblem::EndOfStream)),
            },
            c if is_newline(c) => return ParseResult::failure(cursor.error(KeyProblem::EndOfLine)),
            c => return ParseResult::failure(cursor.error(KeyProblem::UnexpectedSymbol(c))),
        }
    }

    cursor.advance();
    ParseResult::success(key)
}
