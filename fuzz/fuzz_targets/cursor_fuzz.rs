//! Fuzz test for the source cursor
//!
//! Walks arbitrary UTF-8 text with every cursor primitive and checks that
//! offsets stay on character boundaries and positions stay 1-based.
//!
//! Run with: cargo +nightly fuzz run cursor_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use prismalike_dsl::SourceCursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut cursor = SourceCursor::new(input);

        while !cursor.at_end() {
            let before = cursor.position();

            match cursor.current() {
                Some(' ') => {
                    cursor.skip_whitespace();
                }
                Some('#') => {
                    let text = cursor.skip_line();
                    assert!(!text.contains('\n'), "skip_line must not return the newline");
                }
                _ => {
                    cursor.advance();
                }
            }

            let after = cursor.position();
            assert!(after.offset > before.offset, "Every step must make progress");
            assert!(input.is_char_boundary(after.offset), "Offset must be a char boundary");
            assert!(after.line >= 1 && after.column >= 1, "Positions are 1-based");
        }

        assert_eq!(cursor.current(), None);
        assert!(!cursor.try_advance(), "Advancing at end of stream is a no-op");
    }
});
