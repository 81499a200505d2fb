//! Table geometry and border drawing.
//!
//! A [`TableSpec`] describes a table's shape (columns, rows, characters per
//! cell) and where it sits on a canvas. [`TableSpec::draw`] renders the
//! border grid as a standalone [`TableBlock`]: rows alternate between
//! horizontal border rows (`-` fill) and content rows (`|` dividers), with
//! every column boundary marked on both kinds of row.
//!
//! # Examples
//!
//! ```
//! use plaintable::table::TableSpec;
//!
//! let spec = TableSpec::new(2, 1, 4);
//! let block = spec.draw().unwrap();
//! assert_eq!(block.render(), " --- --- \n|   |   |\n --- --- ");
//! ```

use crate::canvas::Point;
use crate::error::TableError;

/// Fill character for horizontal border rows.
const HORIZONTAL_FILL: char = '-';
/// Divider character at column boundaries of content rows.
const VERTICAL_BORDER: char = '|';
/// Boundary character on horizontal border rows (intentionally open corners).
const BOUNDARY_GAP: char = ' ';

/// Configuration describing table geometry and placement on a canvas.
///
/// The row count includes the header row. Derived quantities (border counts,
/// line width, cell capacity) are computed on demand and never stored, so
/// they cannot drift from the fields they are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Number of columns.
    pub columns: usize,
    /// Number of rows, header included.
    pub rows: usize,
    /// Characters allocated to one column within one row.
    pub cell_width: usize,
    /// Top-left corner of the table within a canvas.
    pub origin: Point,
    /// Spaces between a cell's left boundary and its first content character.
    pub indent: usize,
}

impl TableSpec {
    /// Create a spec with origin `(0, 0)` and no indentation.
    #[must_use]
    pub const fn new(columns: usize, rows: usize, cell_width: usize) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            origin: Point::new(0, 0),
            indent: 0,
        }
    }

    /// Place the table's top-left corner at `origin`.
    #[must_use]
    pub const fn origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the left padding before cell content.
    #[must_use]
    pub const fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Number of horizontal border rows, interleaved with content rows.
    #[must_use]
    pub const fn horizontal_borders(&self) -> usize {
        2 * self.rows + 1
    }

    /// Number of vertical border lines.
    #[must_use]
    pub const fn vertical_borders(&self) -> usize {
        self.columns + 1
    }

    /// Characters in one rendered table line.
    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.columns * self.cell_width + 1
    }

    /// Writable characters per cell once indentation is applied.
    #[must_use]
    pub const fn cell_capacity(&self) -> usize {
        self.cell_width.saturating_sub(self.indent)
    }

    /// Render the table's border grid as a standalone block.
    ///
    /// Even block rows are horizontal borders, odd rows hold content. Each
    /// row places a boundary character at position 0 of every cell segment
    /// plus one more to close the right edge.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidDimension`] if `columns`, `rows`, or
    /// `cell_width` is zero.
    pub fn draw(&self) -> Result<TableBlock, TableError> {
        self.validate()?;
        let width = self.line_width();
        let mut rows = Vec::with_capacity(self.horizontal_borders());
        for i in 0..self.horizontal_borders() {
            let (boundary, fill) = if i % 2 == 0 {
                (BOUNDARY_GAP, HORIZONTAL_FILL)
            } else {
                (VERTICAL_BORDER, ' ')
            };
            let mut row = vec![fill; width];
            for boundary_index in 0..self.vertical_borders() {
                row[boundary_index * self.cell_width] = boundary;
            }
            rows.push(row);
        }
        log::debug!(
            "drew {}x{} table block ({} columns, {} rows)",
            width,
            rows.len(),
            self.columns,
            self.rows
        );
        Ok(TableBlock { rows, width })
    }

    fn validate(&self) -> Result<(), TableError> {
        for (what, value) in [
            ("columns", self.columns),
            ("rows", self.rows),
            ("cell_width", self.cell_width),
        ] {
            if value == 0 {
                return Err(TableError::InvalidDimension { what, value });
            }
        }
        Ok(())
    }
}

/// The standalone rendered border pattern of a table before compositing.
///
/// Holds only border and space characters; content is written after the
/// block has been composited into a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl TableBlock {
    /// Number of rows in the block.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.rows.len()
    }

    /// Characters per block row.
    #[must_use]
    pub const fn line_width(&self) -> usize {
        self.width
    }

    /// The character at block position `(x, y)`, or `None` outside the block.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Iterate over block rows top to bottom.
    pub(crate) fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Serialize the block: rows joined by `\n`, no trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * (self.width + 1));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}
