//! Error types for the text engine.

use std::fmt;
use std::io;

/// Result type alias for buffer and session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for buffer and session operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a file into a session.
    Io(io::Error),
    /// Input bytes are not valid UTF-8.
    Decode {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
    /// Row index past the last line of the document.
    RowOutOfBounds { row: usize, height: usize },
    /// Column index past the end of a line.
    ColumnOutOfBounds { row: usize, col: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Decode { offset } => {
                write!(f, "could not decode rune: invalid UTF-8 at byte {offset}")
            }
            Self::RowOutOfBounds { row, height } => {
                write!(f, "row {row} out of bounds for document of {height} lines")
            }
            Self::ColumnOutOfBounds { row, col, len } => {
                write!(
                    f,
                    "column {col} out of bounds for row {row} of length {len}"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Decode {
            offset: e.valid_up_to(),
        }
    }
}
