//! Diagnostics produced while parsing a KV block
//!
//! Each sub-parser owns a closed problem vocabulary. All of them convert into
//! [`Problem`], so a block parse reports one homogeneous, ordered list of
//! [`Diagnostic`] values.

use crate::lexer::SourcePosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// SEVERITY
// ============================================================================

/// Warnings are reported and parsing continues; errors abort the line and
/// with it the enclosing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

// ============================================================================
// PROBLEM KINDS (one set per sub-parser)
// ============================================================================

/// Problems found by the block driver while classifying a line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BlockProblem {
    #[error("Unexpected end of stream")]
    EndOfStream,
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
}

/// Problems found while closing a key/value line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum KeyValueProblem {
    #[error("Unexpected end of stream")]
    EndOfStream,
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
    #[error("Skipped unexpected characters after the end of the block")]
    SkippedSymbols,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum KeyProblem {
    #[error("Expected \"=\" but encountered \"{0}\"")]
    MissingEqualsSign(char),
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
    #[error("Unexpected end of stream")]
    EndOfStream,
    #[error("Unexpected end of line")]
    EndOfLine,
}

/// Problems found while choosing which value parser to run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValueProblem {
    #[error("Unexpected end of stream")]
    EndOfStream,
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum QuotedStringProblem {
    #[error("Skipped unexpected control character")]
    ControlCharacter,
    #[error("Unexpected end of line")]
    NewLine,
    #[error("Unexpected end of stream")]
    EndOfStream,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum NumberProblem {
    #[error("Received an Integer number but a Double number was expected")]
    IntegerInsteadOfDouble,
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
    #[error("Unexpected string \"{0}\"")]
    UnexpectedSequence(String),
    #[error("Unexpected end of stream")]
    EndOfStream,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoolProblem {
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
    #[error("Unexpected end of stream")]
    EndOfStream,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EnvProblem {
    #[error("Unexpected character \"{0}\"")]
    UnexpectedSymbol(char),
    #[error("Inner quoted string value parsing failed: {0}")]
    QuotedString(QuotedStringProblem),
    #[error("Unexpected end of stream")]
    EndOfStream,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CommentProblem {
    #[error("Unexpected character \"{0}\" in a comment opening")]
    UnexpectedSymbol(char),
}

/// Any problem, tagged with the sub-parser vocabulary it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "parser", content = "problem", rename_all = "snake_case")]
pub enum Problem {
    #[error(transparent)]
    Block(#[from] BlockProblem),
    #[error(transparent)]
    KeyValue(#[from] KeyValueProblem),
    #[error(transparent)]
    Key(#[from] KeyProblem),
    #[error(transparent)]
    Value(#[from] ValueProblem),
    #[error(transparent)]
    QuotedString(#[from] QuotedStringProblem),
    #[error(transparent)]
    Number(#[from] NumberProblem),
    #[error(transparent)]
    Boolean(#[from] BoolProblem),
    #[error(transparent)]
    Env(#[from] EnvProblem),
    #[error(transparent)]
    Comment(#[from] CommentProblem),
}

// ============================================================================
// DIAGNOSTIC
// ============================================================================

/// A positioned, severity-tagged problem.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{severity} at line {line}, column {column}: {problem}")]
pub struct Diagnostic {
    pub problem: Problem,
    pub line: usize,
    pub column: usize,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(problem: impl Into<Problem>, position: SourcePosition, severity: Severity) -> Self {
        Self {
            problem: problem.into(),
            line: position.line,
            column: position.column,
            severity,
        }
    }

    pub fn error(problem: impl Into<Problem>, position: SourcePosition) -> Self {
        Self::new(problem, position, Severity::Error)
    }

    pub fn warning(problem: impl Into<Problem>, position: SourcePosition) -> Self {
        Self::new(problem, position, Severity::Warning)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Human-readable message without the location prefix.
    pub fn message(&self) -> String {
        self.problem.to_string()
    }
}
