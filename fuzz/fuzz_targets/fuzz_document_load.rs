//! Fuzz target for document loading and wrapping.
//!
//! Arbitrary bytes must either load or fail with a decode error, and every
//! loaded line must wrap and locate without panicking.

#![no_main]

use ge_text::text::{CursorMapper, CursorPosition, Document};
use ge_text::{Error, WidthMethod};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let doc = match Document::load(data) {
        Ok(doc) => doc,
        Err(Error::Decode { offset }) => {
            assert!(offset <= data.len());
            return;
        }
        Err(err) => panic!("unexpected load error: {err}"),
    };
    assert!(doc.height() >= 1);

    let width = data.first().map_or(1, |&b| usize::from(b % 64));
    let mapper = CursorMapper::new(&doc, width).width_method(WidthMethod::Unicode);
    let total = mapper.total_visual_lines();
    for row in 0..doc.height() {
        let len = doc.line_len(row).unwrap_or(0);
        for col in [0, len / 2, len] {
            let line = mapper
                .absolute_screen_line(CursorPosition::new(row, col))
                .unwrap_or(0);
            assert!(line < total);
        }
    }
});
