//! Signed integer and floating-point values

use crate::lexer::chars::{is_ascii_digit, is_newline};
use crate::lexer::SourceCursor;
use crate::parser::diagnostic::NumberProblem;
use crate::parser::result::ParseResult;

/// The character a number starts with. It sits under the cursor when
/// [`parse_number`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstCharacter {
    Minus,
    Plus,
    Dot,
    Digit(char),
}

impl FirstCharacter {
    pub fn classify(c: char) -> Option<Self> {
        match c {
            '-' => Some(FirstCharacter::Minus),
            '+' => Some(FirstCharacter::Plus),
            '.' => Some(FirstCharacter::Dot),
            c if is_ascii_digit(c) => Some(FirstCharacter::Digit(c)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberOutput {
    Integer(i64),
    Double(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    ParsingInteger,
    ParsingDouble,
}

/// Parse a number whose first character is already under the cursor.
///
/// Scanning stops, without consuming, at a space, `/`, newline or end of
/// stream. A `.` promotes the number to a double.
pub fn parse_number(cursor: &mut SourceCursor<'_>, first: FirstCharacter) -> ParseResult<NumberOutput> {
    let mut state = State::Empty;
    let mut buffer = String::new();

    match first {
        FirstCharacter::Minus => buffer.push('-'),
        FirstCharacter::Plus => {}
        FirstCharacter::Dot => {
            buffer.push_str("0.");
            state = State::ParsingDouble;
        }
        FirstCharacter::Digit(c) => {
            buffer.push(c);
            state = State::ParsingInteger;
        }
    }

    while let Some(c) = cursor.advance() {
        if is_newline(c) || c == ' ' || c == '/' {
            break;
        }

        match (state, c) {
            (_, c) if is_ascii_digit(c) => {
                buffer.push(c);
                if state == State::Empty {
                    state = State::ParsingInteger;
                }
            }
            (State::Empty, '.') => {
                buffer.push_str("0.");
                state = State::ParsingDouble;
            }
            (State::ParsingInteger, '.') => {
                buffer.push('.');
                state = State::ParsingDouble;
            }
            (_, c) => {
                return ParseResult::failure(cursor.error(NumberProblem::UnexpectedSymbol(c)));
            }
        }
    }

    match state {
        State::Empty => ParseResult::failure(cursor.error(NumberProblem::EndOfStream)),
        State::ParsingInteger => match buffer.parse::<i64>() {
            Ok(n) => ParseResult::success(NumberOutput::Integer(n)),
            Err(_) => ParseResult::failure(cursor.error(NumberProblem::UnexpectedSequence(buffer))),
        },
        State::ParsingDouble => match buffer.parse::<f64>() {
            Ok(n) => ParseResult::success(NumberOutput::Double(n)),
            Err(_) => ParseResult::failure(cursor.error(NumberProblem::UnexpectedSequence(buffer))),
        },
    }
}
