//! Character classes shared by every scanner

/// ASCII control characters (code points below 32). Non-ASCII characters are
/// never control characters here.
pub fn is_control(c: char) -> bool {
    (c as u32) < 32
}

pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_ascii_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters allowed inside a key: ASCII letters, ASCII digits and `_`.
pub fn is_word(c: char) -> bool {
    is_ascii_letter(c) || is_ascii_digit(c) || c == '_'
}

/// Only the plain ASCII space counts as inline whitespace.
pub fn is_space(c: char) -> bool {
    c == ' '
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}
