//! Block driver: reads lines until the closing `}`

use super::ast::{BlockHeader, KVBlock, KVLine};
use super::comments::parse_comment;
use super::diagnostic::BlockProblem;
use super::key_value::{close_block, parse_key_value, KeyValueOutcome};
use super::result::ParseResult;
use crate::lexer::chars::is_word;
use crate::lexer::SourceCursor;

// ============================================================================
// LINES
// ============================================================================

/// What a single physical line of a block contained.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// A `///` documentation comment.
    Comment(String),
    /// Blank line, plain `//` comment, or a bare `}`.
    Empty,
    KeyValue(KVLine),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    NewLine(LineKind),
    EndOfBlock(LineKind),
}

impl LineOutcome {
    pub fn into_kind(self) -> LineKind {
        match self {
            LineOutcome::NewLine(kind) | LineOutcome::EndOfBlock(kind) => kind,
        }
    }

    pub fn ends_block(&self) -> bool {
        matches!(self, LineOutcome::EndOfBlock(_))
    }
}

/// Classify and parse one line, starting anywhere before its first
/// non-space character.
pub fn parse_line(cursor: &mut SourceCursor<'_>) -> ParseResult<LineOutcome> {
    match cursor.skip_whitespace() {
        None => ParseResult::failure(cursor.error(BlockProblem::EndOfStream)),
        Some('/') => parse_comment(cursor).map(|doc| {
            LineOutcome::NewLine(doc.map_or(LineKind::Empty, LineKind::Comment))
        }),
        Some('\n') => {
            cursor.advance();
            ParseResult::success(LineOutcome::NewLine(LineKind::Empty))
        }
        Some('}') => match close_block(cursor) {
            Ok(warning) => ParseResult::success_with(
                LineOutcome::EndOfBlock(LineKind::Empty),
                warning.into_iter().collect(),
            ),
            Err(error) => ParseResult::failure(error),
        },
        Some(c) if is_word(c) => parse_key_value(cursor, c).map(|outcome| match outcome {
            KeyValueOutcome::NewLine(line) => LineOutcome::NewLine(LineKind::KeyValue(line)),
            KeyValueOutcome::EndOfBlock(line) => LineOutcome::EndOfBlock(LineKind::KeyValue(line)),
        }),
        Some(c) => ParseResult::failure(cursor.error(BlockProblem::UnexpectedSymbol(c))),
    }
}

// ============================================================================
// BLOCKS
// ============================================================================

/// Parse a block body up to and including its closing `}`.
///
/// The cursor starts just after the header's `{`. `///` comments are held
/// until the next key/value line takes them; any left over when the block
/// closes are appended to the block comments after `header.comments`.
pub fn parse_block(cursor: &mut SourceCursor<'_>, header: &BlockHeader) -> ParseResult<KVBlock> {
    tracing::debug!(block = %header.name, line = cursor.line(), "Parsing block");

    let mut diagnostics = Vec::new();
    let mut lines = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    loop {
        let Some(outcome) = parse_line(cursor).record(&mut diagnostics) else {
            tracing::debug!(
                block = %header.name,
                diagnostics = diagnostics.len(),
                "Block parse failed"
            );
            return ParseResult::failure_with(diagnostics);
        };

        let ends_block = outcome.ends_block();
        let kind = outcome.into_kind();
        tracing::trace!(block = %header.name, ?kind, ends_block, "Parsed line");

        match kind {
            LineKind::Comment(text) => pending.push(text),
            LineKind::Empty => {}
            LineKind::KeyValue(mut line) => {
                let mut comments = std::mem::take(&mut pending);
                comments.append(&mut line.comments);
                line.comments = comments;
                lines.push(line);
            }
        }

        if ends_block {
            break;
        }
    }

    let mut comments = header.comments.clone();
    comments.append(&mut pending);

    tracing::debug!(
        block = %header.name,
        lines = lines.len(),
        diagnostics = diagnostics.len(),
        "Parsed block"
    );

    ParseResult::success_with(
        KVBlock {
            name: header.name.clone(),
            lines,
            comments,
        },
        diagnostics,
    )
}

/// Parse a block body held in a string.
pub fn parse_block_str(
    text: &str,
    name: impl Into<String>,
    comments: Vec<String>,
) -> ParseResult<KVBlock> {
    let header = BlockHeader::new(name).with_comments(comments);
    parse_block(&mut SourceCursor::new(text), &header)
}
