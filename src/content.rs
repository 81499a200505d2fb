//! Writing field content into table cells.
//!
//! Once a table block has been composited, content rows sit at odd block
//! offsets (`2*row_index + 1`) below the table origin. Field `i` of a row
//! starts `indent + i*cell_width` characters right of the origin. Fields
//! longer than the cell's writable span are rejected before anything is
//! written, so an error never leaves a half-populated row.
//!
//! Writing row 0 is legal and conventionally used for the header.

use crate::canvas::Canvas;
use crate::error::TableError;
use crate::table::TableSpec;

/// Write one field per column into content row `row_index` of the table.
///
/// Fields overwrite whatever is in the cell region, so rewriting a row
/// with the same content is idempotent.
///
/// # Errors
///
/// - [`TableError::FieldCountMismatch`] unless exactly one field per column
///   is supplied.
/// - [`TableError::RowIndexOutOfRange`] if `row_index >= spec.rows`.
/// - [`TableError::ContentTooLong`] if any field exceeds
///   [`TableSpec::cell_capacity`].
/// - [`TableError::OutOfBounds`] if the table's content row falls outside
///   the canvas.
///
/// All checks run before the first character is written; on error the
/// canvas is unmodified.
pub fn add_row_content<S: AsRef<str>>(
    canvas: &mut Canvas,
    spec: &TableSpec,
    row_index: usize,
    fields: &[S],
) -> Result<(), TableError> {
    if fields.len() != spec.columns {
        return Err(TableError::FieldCountMismatch {
            expected: spec.columns,
            actual: fields.len(),
        });
    }
    if row_index >= spec.rows {
        return Err(TableError::RowIndexOutOfRange {
            index: row_index,
            rows: spec.rows,
        });
    }
    for (column, field) in fields.iter().enumerate() {
        let length = field.as_ref().chars().count();
        if length > spec.cell_capacity() {
            return Err(TableError::ContentTooLong {
                column,
                length,
                capacity: spec.cell_capacity(),
            });
        }
    }

    let y = spec.origin.y.saturating_add(2 * row_index + 1);
    let x_end = spec.origin.x.saturating_add(spec.line_width());
    if y >= canvas.lines() || x_end > canvas.line_length() {
        return Err(TableError::OutOfBounds {
            x: x_end,
            y,
            lines: canvas.lines(),
            line_length: canvas.line_length(),
        });
    }

    for (column, field) in fields.iter().enumerate() {
        let start = spec
            .origin
            .x
            .saturating_add(spec.indent)
            .saturating_add(column * spec.cell_width);
        for (j, ch) in field.as_ref().chars().enumerate() {
            canvas.set(start + j, y, ch)?;
        }
        log::trace!(
            "wrote field {:?} at row {y}, columns {start}..",
            field.as_ref()
        );
    }
    log::debug!("wrote {} fields into table row {row_index}", fields.len());
    Ok(())
}

/// Read back the content region of one cell, trailing spaces trimmed.
///
/// The region starts at the cell's indent offset and runs to the end of
/// the cell segment, mirroring where [`add_row_content`] writes.
///
/// # Errors
///
/// - [`TableError::RowIndexOutOfRange`] if `row_index >= spec.rows`.
/// - [`TableError::OutOfBounds`] if `column >= spec.columns` or the cell
///   region falls outside the canvas.
pub fn cell_text(
    canvas: &Canvas,
    spec: &TableSpec,
    row_index: usize,
    column: usize,
) -> Result<String, TableError> {
    if row_index >= spec.rows {
        return Err(TableError::RowIndexOutOfRange {
            index: row_index,
            rows: spec.rows,
        });
    }
    let y = spec.origin.y.saturating_add(2 * row_index + 1);
    if column >= spec.columns {
        return Err(TableError::OutOfBounds {
            x: spec
                .origin
                .x
                .saturating_add(spec.indent)
                .saturating_add(column.saturating_mul(spec.cell_width)),
            y,
            lines: canvas.lines(),
            line_length: canvas.line_length(),
        });
    }
    let start = spec
        .origin
        .x
        .saturating_add(spec.indent)
        .saturating_add(column * spec.cell_width);
    let raw = canvas.span(start, y, spec.cell_capacity())?;
    Ok(raw.trim_end().to_string())
}
