// error.rs - Error types for parsing and applying screen commands

use std::fmt;

/// Which extent of the screen a command overran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    RectWidth,
    RectHeight,
    Row,
    Column,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bound::RectWidth  => "rect width",
            Bound::RectHeight => "rect height",
            Bound::Row        => "row index",
            Bound::Column     => "column index",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("unrecognized command: {0:?}")]
    UnrecognizedCommand(String),
    #[error("{bound} {value} is out of bounds (limit {limit})")]
    OutOfBounds { bound: Bound, value: usize, limit: usize },
}

/// A [`ScreenError`] pinned to the input line that caused it.
///
/// Display names only the line; the cause is reachable through `source()`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_no} ({line:?})")]
pub struct LineError {
    /// 1-based position in the input.
    pub line_no: usize,
    pub line: String,
    #[source]
    pub source: ScreenError,
}

pub type ScreenResult<T> = Result<T, ScreenError>;
