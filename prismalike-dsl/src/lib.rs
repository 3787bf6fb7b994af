//! PRISMALIKE DSL - Key/value block parser
//!
//! Parses the `key = value` blocks found in Prisma-style schema files
//! (`datasource db { ... }`, `generator client { ... }`) into a structured
//! [`KVBlock`] plus an ordered list of positioned diagnostics.
//!
//! Architecture:
//! ```text
//! Block body text
//!     ↓
//! SourceCursor (line/column tracking)
//!     ↓
//! Block driver (one line at a time)
//!     ↓
//! Key parser → value dispatch → quoted / number / boolean / env
//!     ↓
//! ParseResult<KVBlock> (value + warnings, or errors)
//!     ↓
//! Pretty printer (for round-trip testing)
//! ```
//!
//! Warnings never stop a parse. The first error aborts the block.

pub mod lexer;
pub mod parser;
pub mod pretty_printer;

// Re-export key types for convenience
pub use lexer::{SourceCursor, SourcePosition};
pub use parser::*;
pub use pretty_printer::{pretty_print, round_trip};
