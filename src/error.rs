//! Error types for canvas and table operations.
//!
//! Every variant carries the offending values so callers can report what
//! was asked for, not just that something failed. All precondition checks
//! run before any mutation: an error always leaves the canvas untouched.

use std::fmt;
use std::io;

/// Error type for canvas, table, and document operations.
#[derive(Debug)]
pub enum TableError {
    /// A spec or canvas dimension was zero.
    InvalidDimension {
        /// Which dimension was invalid (e.g. `"columns"`).
        what: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// A write or composite target falls outside the canvas.
    OutOfBounds {
        /// Rightmost column the operation would touch.
        x: usize,
        /// Bottom row the operation would touch.
        y: usize,
        /// Number of lines in the canvas.
        lines: usize,
        /// Characters per canvas line.
        line_length: usize,
    },
    /// The number of fields did not match the table's column count.
    FieldCountMismatch {
        /// The table's column count.
        expected: usize,
        /// The number of fields supplied.
        actual: usize,
    },
    /// A content row index was at or past the table's row count.
    RowIndexOutOfRange {
        /// The rejected row index.
        index: usize,
        /// The table's row count.
        rows: usize,
    },
    /// A field is longer than the writable span of its cell.
    ContentTooLong {
        /// Zero-based column of the offending field.
        column: usize,
        /// Length of the field in characters.
        length: usize,
        /// Writable characters per cell (`cell_width - indent`).
        capacity: usize,
    },
    /// Writing the document to its destination failed.
    Io(io::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { what, value } => {
                write!(f, "invalid dimension: {what} must be at least 1, got {value}")
            }
            Self::OutOfBounds {
                x,
                y,
                lines,
                line_length,
            } => write!(
                f,
                "out of bounds: target extends to ({x}, {y}) on a {line_length}x{lines} canvas"
            ),
            Self::FieldCountMismatch { expected, actual } => {
                write!(f, "field count mismatch: table has {expected} columns, got {actual} fields")
            }
            Self::RowIndexOutOfRange { index, rows } => {
                write!(f, "row index {index} out of range for table with {rows} rows")
            }
            Self::ContentTooLong {
                column,
                length,
                capacity,
            } => write!(
                f,
                "content too long: field in column {column} is {length} chars, cell holds {capacity}"
            ),
            Self::Io(err) => write!(f, "document write failed: {err}"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
