//! Canvas - the fixed-size character surface tables are drawn onto.
//!
//! A [`Canvas`] is a rectangular grid of characters representing the full
//! output document. It is created blank (all spaces), mutated one character
//! at a time, and serialized to text with rows joined by single newlines.
//! Mutation never resizes the grid: every row keeps the same length for the
//! lifetime of the canvas.

use std::fmt;

use crate::error::TableError;

/// A zero-based (x, y) offset into a canvas.
///
/// `x` indexes characters within a line, `y` indexes lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Column offset.
    pub x: usize,
    /// Line offset.
    pub y: usize,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The rectangular character buffer representing the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
    line_length: usize,
}

impl Canvas {
    /// Create a blank canvas of `lines` rows, each `line_length` spaces.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidDimension`] if either dimension is zero.
    pub fn new(lines: usize, line_length: usize) -> Result<Self, TableError> {
        if lines == 0 {
            return Err(TableError::InvalidDimension {
                what: "lines",
                value: lines,
            });
        }
        if line_length == 0 {
            return Err(TableError::InvalidDimension {
                what: "line_length",
                value: line_length,
            });
        }
        log::debug!("created blank {line_length}x{lines} canvas");
        Ok(Self {
            rows: vec![vec![' '; line_length]; lines],
            line_length,
        })
    }

    /// Parse a rendered document back into a canvas.
    ///
    /// The input must be non-empty and every line must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidDimension`] on empty input or ragged rows.
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        let rows: Vec<Vec<char>> = text.split('\n').map(|line| line.chars().collect()).collect();
        let line_length = rows.first().map_or(0, Vec::len);
        if line_length == 0 {
            return Err(TableError::InvalidDimension {
                what: "line_length",
                value: 0,
            });
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != line_length) {
            return Err(TableError::InvalidDimension {
                what: "line_length",
                value: ragged.len(),
            });
        }
        Ok(Self { rows, line_length })
    }

    /// Number of lines in the canvas.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.rows.len()
    }

    /// Number of characters per line.
    #[must_use]
    pub const fn line_length(&self) -> usize {
        self.line_length
    }

    /// Get the character at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Replace the character at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), TableError> {
        if y >= self.rows.len() || x >= self.line_length {
            return Err(TableError::OutOfBounds {
                x,
                y,
                lines: self.rows.len(),
                line_length: self.line_length,
            });
        }
        self.rows[y][x] = ch;
        Ok(())
    }

    /// Read a horizontal span of `len` characters starting at `(x, y)`.
    ///
    /// Used to inspect cell regions after content has been written.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfBounds`] if the span leaves the grid.
    pub fn span(&self, x: usize, y: usize, len: usize) -> Result<String, TableError> {
        if y >= self.rows.len() || x.saturating_add(len) > self.line_length {
            return Err(TableError::OutOfBounds {
                x: x.saturating_add(len),
                y,
                lines: self.rows.len(),
                line_length: self.line_length,
            });
        }
        Ok(self.rows[y][x..x + len].iter().collect())
    }

    /// Serialize the canvas: rows joined by `\n`, no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.line_length + 1));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let canvas = Canvas::new(3, 5).unwrap();
        assert_eq!(canvas.lines(), 3);
        assert_eq!(canvas.line_length(), 5);
        assert_eq!(canvas.render(), "     \n     \n     ");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Canvas::new(0, 5),
            Err(TableError::InvalidDimension { what: "lines", .. })
        ));
        assert!(matches!(
            Canvas::new(3, 0),
            Err(TableError::InvalidDimension {
                what: "line_length",
                ..
            })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set(1, 0, 'x').unwrap();
        assert_eq!(canvas.get(1, 0), Some('x'));
        assert_eq!(canvas.get(0, 0), Some(' '));
        assert_eq!(canvas.get(2, 0), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        assert!(matches!(
            canvas.set(2, 0, 'x'),
            Err(TableError::OutOfBounds { .. })
        ));
        assert!(matches!(
            canvas.set(0, 2, 'x'),
            Err(TableError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_render_no_trailing_newline() {
        let canvas = Canvas::new(2, 1).unwrap();
        assert_eq!(canvas.render(), " \n ");
    }

    #[test]
    fn test_from_text_round_trip() {
        let mut canvas = Canvas::new(4, 6).unwrap();
        canvas.set(2, 1, '#').unwrap();
        canvas.set(5, 3, '!').unwrap();
        let reparsed = Canvas::from_text(&canvas.render()).unwrap();
        assert_eq!(reparsed, canvas);
    }

    #[test]
    fn test_from_text_ragged_rejected() {
        assert!(matches!(
            Canvas::from_text("abc\nab"),
            Err(TableError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_text_empty_rejected() {
        assert!(Canvas::from_text("").is_err());
    }

    #[test]
    fn test_span_reads_region() {
        let mut canvas = Canvas::new(1, 8).unwrap();
        for (i, ch) in "hello".chars().enumerate() {
            canvas.set(2 + i, 0, ch).unwrap();
        }
        assert_eq!(canvas.span(2, 0, 5).unwrap(), "hello");
        assert!(canvas.span(4, 0, 5).is_err());
    }

    #[test]
    fn test_span_huge_offset_rejected() {
        let canvas = Canvas::new(1, 8).unwrap();
        assert!(matches!(
            canvas.span(usize::MAX, 0, 5),
            Err(TableError::OutOfBounds { .. })
        ));
    }
}
