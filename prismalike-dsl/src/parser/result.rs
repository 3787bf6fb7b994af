//! Two-case parse outcome shared by every sub-parser

use super::diagnostic::Diagnostic;

/// Outcome of a parse step.
///
/// `Success` may still carry warnings. `Failure` never carries a value; any
/// warnings gathered before the failure must be threaded into its list.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T> {
    Success {
        value: T,
        diagnostics: Vec<Diagnostic>,
    },
    Failure {
        diagnostics: Vec<Diagnostic>,
    },
}

impl<T> ParseResult<T> {
    pub fn success(value: T) -> Self {
        ParseResult::Success {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn success_with(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        ParseResult::Success { value, diagnostics }
    }

    /// Failure reporting a single fatal diagnostic.
    pub fn failure(diagnostic: Diagnostic) -> Self {
        ParseResult::Failure {
            diagnostics: vec![diagnostic],
        }
    }

    pub fn failure_with(diagnostics: Vec<Diagnostic>) -> Self {
        ParseResult::Failure { diagnostics }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ParseResult::Success { diagnostics, .. } | ParseResult::Failure { diagnostics } => {
                diagnostics
            }
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics().iter().filter(|d| d.is_warning())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics().iter().filter(|d| d.is_error())
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            ParseResult::Success { diagnostics, .. } | ParseResult::Failure { diagnostics } => {
                diagnostics
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            ParseResult::Success { value, diagnostics } => ParseResult::Success {
                value: f(value),
                diagnostics,
            },
            ParseResult::Failure { diagnostics } => ParseResult::Failure { diagnostics },
        }
    }

    /// Put `leading` in front of this result's diagnostics, keeping the
    /// outcome unchanged.
    pub fn with_leading(self, mut leading: Vec<Diagnostic>) -> Self {
        match self {
            ParseResult::Success { value, diagnostics } => {
                leading.extend(diagnostics);
                ParseResult::Success {
                    value,
                    diagnostics: leading,
                }
            }
            ParseResult::Failure { diagnostics } => {
                leading.extend(diagnostics);
                ParseResult::Failure {
                    diagnostics: leading,
                }
            }
        }
    }

    /// Move this result's diagnostics onto `sink` and hand back the value.
    ///
    /// Composing parsers use this to keep one ordered diagnostic list while
    /// bailing out on the first failed step.
    pub fn record(self, sink: &mut Vec<Diagnostic>) -> Option<T> {
        match self {
            ParseResult::Success { value, diagnostics } => {
                sink.extend(diagnostics);
                Some(value)
            }
            ParseResult::Failure { diagnostics } => {
                sink.extend(diagnostics);
                None
            }
        }
    }

    pub fn map_diagnostics(self, f: impl FnMut(Diagnostic) -> Diagnostic) -> Self {
        match self {
            ParseResult::Success { value, diagnostics } => ParseResult::Success {
                value,
                diagnostics: diagnostics.into_iter().map(f).collect(),
            },
            ParseResult::Failure { diagnostics } => ParseResult::Failure {
                diagnostics: diagnostics.into_iter().map(f).collect(),
            },
        }
    }

    /// Split into a std `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(T, Vec<Diagnostic>), Vec<Diagnostic>> {
        match self {
            ParseResult::Success { value, diagnostics } => Ok((value, diagnostics)),
            ParseResult::Failure { diagnostics } => Err(diagnostics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::SourcePosition;
    use crate::parser::diagnostic::{BlockProblem, KeyValueProblem};

    fn warning() -> Diagnostic {
        Diagnostic::warning(KeyValueProblem::SkippedSymbols, SourcePosition::default())
    }

    fn error() -> Diagnostic {
        Diagnostic::error(BlockProblem::EndOfStream, SourcePosition::default())
    }

    #[test]
    fn test_failure_has_no_value() {
        let result: ParseResult<i32> = ParseResult::failure(error());
        assert!(result.is_failure());
        assert_eq!(result.value(), None);
        assert_eq!(result.errors().count(), 1);
    }

    #[test]
    fn test_success_may_carry_warnings() {
        let result = ParseResult::success_with(7, vec![warning()]);
        assert_eq!(result.value(), Some(&7));
        assert_eq!(result.warnings().count(), 1);
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_with_leading_preserves_order() {
        let result: ParseResult<()> = ParseResult::failure(error()).with_leading(vec![warning()]);
        assert_eq!(result.diagnostics(), &[warning(), error()]);
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut sink = vec![warning()];
        let value = ParseResult::success_with("ok", vec![warning()]).record(&mut sink);
        assert_eq!(value, Some("ok"));
        assert_eq!(sink.len(), 2);

        let failed: Option<()> = ParseResult::failure(error()).record(&mut sink);
        assert_eq!(failed, None);
        assert_eq!(sink, vec![warning(), warning(), error()]);
    }

    #[test]
    fn test_map_and_into_result() {
        let result = ParseResult::success_with(2, vec![warning()]).map(|n| n * 10);
        assert_eq!(result.into_result(), Ok((20, vec![warning()])));

        let failed: ParseResult<i32> = ParseResult::failure(error());
        assert_eq!(failed.map(|n| n + 1).into_result(), Err(vec![error()]));
    }
}
