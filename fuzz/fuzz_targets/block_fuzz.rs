//! Fuzz test for the KV block parser
//!
//! Feeds arbitrary UTF-8 text to the block driver and checks:
//! - No panics or infinite loops
//! - Failures carry an error, successes only warnings
//! - Successful blocks survive a print → parse round trip
//!
//! Run with: cargo +nightly fuzz run block_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use prismalike_dsl::{parse_block_str, round_trip, ParseResult};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match parse_block_str(input, "fuzz", Vec::new()) {
            ParseResult::Success { value, diagnostics } => {
                assert!(diagnostics.iter().all(|d| d.is_warning()));
                // Backslashes before a closing quote do not survive printing.
                let printable = value.lines.iter().all(|line| {
                    line.value
                        .as_str()
                        .or_else(|| line.value.as_env())
                        .map_or(true, |s| !s.contains('\\'))
                        && line.value.as_f64().map_or(true, f64::is_finite)
                });
                if printable {
                    assert!(round_trip(&value).is_success(), "Printed block must parse");
                }
            }
            ParseResult::Failure { diagnostics } => {
                assert!(diagnostics.iter().any(|d| d.is_error()));
                for diagnostic in &diagnostics {
                    assert!(diagnostic.line >= 1, "Error line should be >= 1");
                    assert!(diagnostic.column >= 1, "Error column should be >= 1");
                }
            }
        }
    }
});
