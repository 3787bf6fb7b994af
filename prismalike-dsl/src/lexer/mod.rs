//! Character-level scanning for KV blocks

pub mod chars;
pub mod cursor;

pub use cursor::*;
