//! Fuzz target for editing commands.
//!
//! Replays an arbitrary command sequence against a session and checks the
//! cursor always stays on a valid position.

#![no_main]

use arbitrary::Arbitrary;
use ge_text::{EditSession, EditorOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Command {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    Home,
    End,
    KillBefore,
    KillAfter,
    KillWordBackward,
    KillWordForward,
    Resize(u8, u8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    commands: Vec<Command>,
}

fuzz_target!(|input: Input| {
    let Ok(mut session) =
        EditSession::from_bytes(input.text.as_bytes(), "fuzz.md", EditorOptions::default())
    else {
        return;
    };

    for command in input.commands.iter().take(512) {
        let result = match *command {
            Command::Insert(c) => session.insert_rune(c),
            Command::Newline => session.insert_newline(),
            Command::Backspace => session.delete_character_backward(),
            Command::Delete => session.delete_character_forward(),
            Command::Left => Ok(session.character_left()),
            Command::Right => Ok(session.character_right()),
            Command::Up => Ok(session.cursor_up()),
            Command::Down => Ok(session.cursor_down()),
            Command::WordLeft => Ok(session.word_left()),
            Command::WordRight => Ok(session.word_right()),
            Command::Home => Ok(session.cursor_start()),
            Command::End => Ok(session.cursor_end()),
            Command::KillBefore => session.delete_before_cursor(),
            Command::KillAfter => session.delete_after_cursor(),
            Command::KillWordBackward => session.delete_word_backward(),
            Command::KillWordForward => session.delete_word_forward(),
            Command::Resize(w, h) => {
                session.set_width(usize::from(w));
                session.set_height(usize::from(h));
                Ok(())
            }
        };
        assert!(result.is_ok(), "{command:?} failed: {result:?}");

        let cursor = session.cursor();
        assert!(cursor.row < session.document().height());
        assert!(cursor.col <= session.document().line_len(cursor.row).unwrap_or(0));
        let viewport = session.viewport();
        assert!(viewport.visible_range().contains(&session.cursor_line_number()));
    }
    let _ = session.render_text();
});
