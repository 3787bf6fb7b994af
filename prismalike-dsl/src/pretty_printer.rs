//! Canonical printer for parsed KV blocks

use crate::parser::{parse_block_str, KVBlock, KVLine, KVValue, ParseResult};

/// Render a block with its `name {` header.
pub fn pretty_print(block: &KVBlock) -> String {
    let mut output = format!("{} {{\n", block.name);
    output.push_str(&pretty_print_body(block));
    output
}

/// Render the text that follows a block's `{`, through the closing `}`.
///
/// Each line's comments are written as `///` lines above it and the block
/// comments as `///` lines before the `}`, so parsing the output with no
/// header comments rebuilds the same block.
pub fn pretty_print_body(block: &KVBlock) -> String {
    let mut output = String::new();
    for line in &block.lines {
        print_line(&mut output, line);
    }
    for comment in &block.comments {
        output.push_str(&format!("  /// {}\n", comment));
    }
    output.push_str("}\n");
    output
}

fn print_line(output: &mut String, line: &KVLine) {
    for comment in &line.comments {
        output.push_str(&format!("  /// {}\n", comment));
    }
    output.push_str(&format!("  {} = {}\n", line.key, print_value(&line.value)));
}

/// Render a value so that it parses back to the same variant.
///
/// `Text` has no literal form of its own and prints as a quoted string.
pub fn print_value(value: &KVValue) -> String {
    match value {
        KVValue::Text(s) | KVValue::QuotedString(s) => format!("\"{}\"", escape_string(s)),
        KVValue::Integer(n) => n.to_string(),
        KVValue::Number(n) => print_number(*n),
        KVValue::Boolean(b) => b.to_string(),
        KVValue::EnvRef(name) => format!("env(\"{}\")", escape_string(name)),
    }
}

fn print_number(n: f64) -> String {
    // Whole doubles need a fraction or they would re-parse as integers.
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

/// Escape a string for use between double quotes.
///
/// Only `"` has an escape; backslashes are written as they are.
pub fn escape_string(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Print `block` and parse the result again.
pub fn round_trip(block: &KVBlock) -> ParseResult<KVBlock> {
    parse_block_str(&pretty_print_body(block), block.name.clone(), Vec::new())
}
