//! Compositing table blocks into a canvas.
//!
//! Copies a rendered [`TableBlock`] into a [`Canvas`] at an offset using
//! direct 2D indexing: block position `(c, r)` lands at canvas position
//! `(origin.x + c, origin.y + r)`. Bounds are checked up front, so a
//! rejected composite leaves the canvas untouched and nothing outside the
//! target rectangle is ever written.

use crate::canvas::{Canvas, Point};
use crate::error::TableError;
use crate::table::{TableBlock, TableSpec};

/// Copy `block` into `canvas` with its top-left corner at `origin`.
///
/// # Errors
///
/// Returns [`TableError::OutOfBounds`] if any part of the block would fall
/// outside the canvas.
pub fn composite(
    canvas: &mut Canvas,
    block: &TableBlock,
    origin: Point,
) -> Result<(), TableError> {
    // Saturating sums so an absurd origin reports OutOfBounds instead of
    // wrapping past the bounds check.
    let y_end = origin.y.saturating_add(block.lines());
    let x_end = origin.x.saturating_add(block.line_width());
    if y_end > canvas.lines() || x_end > canvas.line_length() {
        return Err(TableError::OutOfBounds {
            x: x_end,
            y: y_end,
            lines: canvas.lines(),
            line_length: canvas.line_length(),
        });
    }
    for (r, row) in block.iter_rows().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            canvas.set(origin.x + c, origin.y + r, ch)?;
        }
    }
    log::debug!(
        "composited {}x{} block at ({}, {})",
        block.line_width(),
        block.lines(),
        origin.x,
        origin.y
    );
    Ok(())
}

/// Draw `spec`'s table and composite it at `spec.origin`.
///
/// # Errors
///
/// Returns [`TableError::InvalidDimension`] for a zero spec dimension, or
/// [`TableError::OutOfBounds`] if the table does not fit on the canvas.
pub fn composite_spec(canvas: &mut Canvas, spec: &TableSpec) -> Result<(), TableError> {
    let block = spec.draw()?;
    composite(canvas, &block, spec.origin)
}
