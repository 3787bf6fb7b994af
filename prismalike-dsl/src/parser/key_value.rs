//! A single `key = value` line and what ends it

use super::ast::KVLine;
use super::comments::parse_comment;
use super::diagnostic::{Diagnostic, KeyValueProblem};
use super::key::parse_key;
use super::result::ParseResult;
use super::values::parse_value;
use crate::lexer::SourceCursor;

/// How a key/value line ended.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValueOutcome {
    /// The line ended normally; more lines may follow.
    NewLine(KVLine),
    /// The line was closed by `}`.
    EndOfBlock(KVLine),
}

impl KeyValueOutcome {
    pub fn ends_block(&self) -> bool {
        matches!(self, KeyValueOutcome::EndOfBlock(_))
    }
}

/// Parse `key = value` followed by a newline, a comment or `}`.
///
/// `first` is the key's first character, already under the cursor. A `///`
/// comment after the value is attached to the returned line.
pub fn parse_key_value(cursor: &mut SourceCursor<'_>, first: char) -> ParseResult<KeyValueOutcome> {
    let mut diagnostics = Vec::new();

    let Some(key) = parse_key(cursor, first).record(&mut diagnostics) else {
        return ParseResult::failure_with(diagnostics);
    };

    cursor.skip_whitespace();
    let Some(value) = parse_value(cursor).record(&mut diagnostics) else {
        return ParseResult::failure_with(diagnostics);
    };

    let mut line = KVLine::new(key, value);

    match cursor.skip_whitespace() {
        None => {
            diagnostics.push(cursor.error(KeyValueProblem::EndOfStream));
            ParseResult::failure_with(diagnostics)
        }
        Some('\n') => {
            cursor.advance();
            ParseResult::success_with(KeyValueOutcome::NewLine(line), diagnostics)
        }
        Some('}') => match close_block(cursor) {
            Ok(warning) => {
                diagnostics.extend(warning);
                ParseResult::success_with(KeyValueOutcome::EndOfBlock(line), diagnostics)
            }
            Err(error) => {
                diagnostics.push(error);
                ParseResult::failure_with(diagnostics)
            }
        },
        Some('/') => {
            let Some(doc) = parse_comment(cursor).record(&mut diagnostics) else {
                return ParseResult::failure_with(diagnostics);
            };
            line.comments.extend(doc);
            ParseResult::success_with(KeyValueOutcome::NewLine(line), diagnostics)
        }
        Some(c) => {
            diagnostics.push(cursor.error(KeyValueProblem::UnexpectedSymbol(c)));
            ParseResult::failure_with(diagnostics)
        }
    }
}

/// Step over the `}` under the cursor and the rest of its line.
///
/// Text after `} ` is skipped with a warning. Text glued to the brace is an
/// error.
pub(super) fn close_block(cursor: &mut SourceCursor<'_>) -> Result<Option<Diagnostic>, Diagnostic> {
    match cursor.advance() {
        None => Ok(None),
        Some('\n') => {
            cursor.advance();
            Ok(None)
        }
        Some(' ') => match cursor.skip_whitespace() {
            None => Ok(None),
            Some('\n') => {
                cursor.advance();
                Ok(None)
            }
            Some(_) => {
                let warning = cursor.warning(KeyValueProblem::SkippedSymbols);
                cursor.skip_line();
                Ok(Some(warning))
            }
        },
        Some(c) => Err(cursor.error(KeyValueProblem::UnexpectedSymbol(c))),
    }
}
