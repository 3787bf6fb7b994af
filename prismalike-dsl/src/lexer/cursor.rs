//! Source cursor

use super::chars::{is_newline, is_space};
use crate::parser::diagnostic::{Diagnostic, Problem, Severity};
use serde::{Deserialize, Serialize};

// ============================================================================
// POSITION
// ============================================================================

/// A saved location in the source text.
///
/// `offset` is a byte offset into the text, `line` and `column` are 1-based
/// and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

// ============================================================================
// CURSOR
// ============================================================================

/// Character cursor over an immutable text buffer.
///
/// Every sub-parser borrows the same cursor mutably and moves it forward one
/// character at a time. Stepping over `\n` moves to the first column of the
/// next line; stepping over anything else (including the last character of
/// the input) moves one column to the right.
#[derive(Debug, Clone)]
pub struct SourceCursor<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> SourceCursor<'a> {
    /// Create a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The full text this cursor scans.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The character under the cursor, or `None` at end of stream.
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Step over the current character and return the new current character.
    ///
    /// At end of stream this is a no-op returning `None`.
    pub fn advance(&mut self) -> Option<char> {
        self.try_advance();
        self.current()
    }

    /// Step over the current character, returning `false` if the cursor was
    /// already at end of stream.
    pub fn try_advance(&mut self) -> bool {
        let Some(c) = self.current() else {
            return false;
        };

        self.pos += c.len_utf8();
        if is_newline(c) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        true
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn at_start(&self) -> bool {
        self.pos == 0
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Snapshot the current location.
    pub fn position(&self) -> SourcePosition {
        SourcePosition {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Return to a location previously taken with [`SourceCursor::position`].
    ///
    /// A position whose offset is past the end or inside a multi-byte
    /// character is rejected: the cursor stays put and `false` is returned.
    pub fn restore(&mut self, position: SourcePosition) -> bool {
        if !self.source.is_char_boundary(position.offset) {
            return false;
        }
        self.pos = position.offset;
        self.line = position.line;
        self.column = position.column;
        true
    }

    /// Skip ASCII spaces (not tabs or newlines) starting at the current
    /// character and return the character that stopped the scan.
    pub fn skip_whitespace(&mut self) -> Option<char> {
        let mut current = self.current();
        while let Some(c) = current {
            if !is_space(c) {
                break;
            }
            current = self.advance();
        }
        current
    }

    /// Consume the rest of the line, including its `\n`, and return the
    /// consumed text without the newline.
    pub fn skip_line(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if is_newline(c) {
                let text = &self.source[start..self.pos];
                self.try_advance();
                return text;
            }
            self.try_advance();
        }
        &self.source[start..self.pos]
    }

    /// Build a diagnostic located at the current character.
    pub fn diagnostic_at_current(
        &self,
        problem: impl Into<Problem>,
        severity: Severity,
    ) -> Diagnostic {
        self.diagnostic_at(self.position(), problem, severity)
    }

    /// Build a diagnostic located at a saved position.
    pub fn diagnostic_at(
        &self,
        position: SourcePosition,
        problem: impl Into<Problem>,
        severity: Severity,
    ) -> Diagnostic {
        Diagnostic::new(problem, position, severity)
    }

    /// Error located at the current character.
    pub fn error(&self, problem: impl Into<Problem>) -> Diagnostic {
        self.diagnostic_at_current(problem, Severity::Error)
    }

    /// Warning located at the current character.
    pub fn warning(&self, problem: impl Into<Problem>) -> Diagnostic {
        self.diagnostic_at_current(problem, Severity::Warning)
    }
}
