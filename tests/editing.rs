//! End-to-end editing tests: load, edit, wrap and cursor mapping through the
//! public API.
//!
//! With logging:
//!   `RUST_LOG=trace` cargo test --test `editing` -- --nocapture

use std::io::Write;
use std::sync::Once;

use ge_text::text::{CursorMapper, CursorPosition, Document, LineInfo, wrap};
use ge_text::{EditSession, EditorOptions, Error, WidthMethod};
use tracing::Level;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

fn lines(doc: &Document) -> Vec<String> {
    doc.lines().map(|line| line.to_string()).collect()
}

fn options(width: usize) -> EditorOptions {
    EditorOptions::default()
        .width(width)
        .show_line_numbers(false)
        .width_method(WidthMethod::WcWidth)
}

#[test]
fn load_empty_gives_one_empty_line() {
    init_logging();
    let doc = Document::load(b"").unwrap();
    assert_eq!(doc.height(), 1);
    assert_eq!(lines(&doc), vec![""]);
}

#[test]
fn insert_rune_mid_line() {
    init_logging();
    let mut doc = Document::load(b"ab\ncd").unwrap();
    assert_eq!(lines(&doc), vec!["ab", "cd"]);
    doc.insert_rune('X', 0, 1).unwrap();
    assert_eq!(lines(&doc), vec!["aXb", "cd"]);
}

#[test]
fn wrap_hello_world_at_five() {
    init_logging();
    let chars: Vec<char> = "hello world".chars().collect();
    let visual: Vec<String> = wrap(&chars, 5).iter().map(ToString::to_string).collect();
    assert_eq!(visual, vec!["hello ", "world "]);
}

#[test]
fn locate_end_of_row_does_not_leave_the_row() {
    init_logging();
    let doc = Document::from_text("hello");
    let mapper = CursorMapper::new(&doc, 5).width_method(WidthMethod::WcWidth);
    let info = mapper.locate(CursorPosition::new(0, 5)).unwrap();
    assert_eq!(
        info,
        LineInfo {
            width: 6,
            char_width: 6,
            height: 1,
            start_column: 0,
            column_offset: 5,
            row_offset: 0,
            char_offset: 5,
        }
    );
}

#[test]
fn split_line_in_two() {
    init_logging();
    let mut doc = Document::load(b"abcdef").unwrap();
    doc.split_line(0, 2).unwrap();
    assert_eq!(doc.height(), 2);
    assert_eq!(lines(&doc), vec!["ab", "cdef"]);
}

#[test]
fn crlf_input_is_normalized() {
    init_logging();
    let doc = Document::load(b"one\r\ntwo\r\n").unwrap();
    assert_eq!(lines(&doc), vec!["one", "two"]);
}

#[test]
fn invalid_utf8_is_rejected() {
    init_logging();
    let err = Document::load(b"ok\n\xff").unwrap_err();
    assert!(matches!(err, Error::Decode { offset: 3 }));
}

#[test]
fn out_of_range_rows_error() {
    init_logging();
    let mut doc = Document::from_text("a\nb");
    assert!(matches!(
        doc.line(2),
        Err(Error::RowOutOfBounds { row: 2, height: 2 })
    ));
    assert!(matches!(
        doc.insert_rune('x', 0, 5),
        Err(Error::ColumnOutOfBounds { row: 0, col: 5, len: 1 })
    ));
    assert_eq!(lines(&doc), vec!["a", "b"]);
}

#[test]
fn open_reads_file_from_disk() {
    init_logging();
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    file.write_all(b"# Notes\r\n\r\nsome *text*\r\n").unwrap();

    let session = EditSession::open(file.path(), options(40)).unwrap();
    assert_eq!(session.document().height(), 3);
    assert_eq!(session.document().text(), "# Notes\n\nsome *text*");
    assert!(session.render_text().starts_with("\x1b[1m# Notes"));
}

#[test]
fn open_missing_file_is_io_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let result = EditSession::open(dir.path().join("absent.txt"), options(40));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn typing_a_paragraph_wraps_and_scrolls() {
    init_logging();
    let mut session = EditSession::new(options(10).height(2));
    session
        .insert_str("the quick brown fox jumped over")
        .unwrap();

    // "the quick " | "brown fox " | "jumped " | "over "
    let visual: Vec<String> = session
        .visual_lines(0)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(visual, vec!["the quick ", "brown fox ", "jumped ", "over "]);

    let info = session.line_info();
    assert_eq!(info.height, 4);
    assert_eq!(info.row_offset, 3);
    assert_eq!(session.cursor_line_number(), 3);
    assert_eq!(session.viewport().offset(), 2);

    session.cursor_up();
    session.cursor_up();
    session.cursor_up();
    assert_eq!(session.cursor_line_number(), 0);
    assert_eq!(session.viewport().offset(), 0);
    assert_eq!(session.cursor(), CursorPosition::new(0, 4));
}

#[test]
fn narrowing_the_session_rewraps() {
    init_logging();
    let mut session = EditSession::from_bytes(b"alpha beta gamma", "", options(40)).unwrap();
    session.cursor_end();
    assert_eq!(session.cursor_line_number(), 0);

    session.set_width(6);
    assert_eq!(session.text_width(), 6);
    assert_eq!(session.cursor_line_number(), 2);
    assert_eq!(session.line_info().height, 3);
}

#[test]
fn gutter_reduces_wrap_width() {
    init_logging();
    let opts = EditorOptions::default().width(13);
    let session = EditSession::from_bytes(b"aaaa bbbb cc", "", opts).unwrap();
    assert_eq!(session.text_width(), 10);
    assert_eq!(session.line_info().height, 2);
}

#[test]
fn edit_round_trip_restores_text() {
    init_logging();
    let mut session = EditSession::from_bytes("日本語 text\nnext".as_bytes(), "", options(20)).unwrap();
    session.set_cursor(3);
    session.insert_newline().unwrap();
    assert_eq!(session.document().text(), "日本語\n text\nnext");
    session.delete_character_backward().unwrap();
    assert_eq!(session.document().text(), "日本語 text\nnext");
    assert_eq!(session.cursor(), CursorPosition::new(0, 3));
}
