//! Recursive-descent parser for KV blocks

pub mod ast;
pub mod block;
pub mod comments;
pub mod diagnostic;
pub mod header;
pub mod key;
pub mod key_value;
pub mod result;
pub mod values;

pub use ast::{BlockHeader, KVBlock, KVLine, KVValue};
pub use block::{parse_block, parse_block_str, parse_line, LineKind, LineOutcome};
pub use comments::parse_comment;
pub use diagnostic::*;
pub use header::skip_header;
pub use key::parse_key;
pub use key_value::{parse_key_value, KeyValueOutcome};
pub use result::ParseResult;
pub use values::parse_value;
