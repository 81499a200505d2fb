//! Renders an invoice-style table into a 150x150 text document and writes
//! it to `invoice.txt` in the current directory.
//!
//! Run with: cargo run --example invoice

use plaintable::compose::composite_spec;
use plaintable::content::add_row_content;
use plaintable::document::write_to_path;
use plaintable::prelude::*;

fn main() -> Result<(), TableError> {
    let mut canvas = Canvas::new(150, 150)?;

    // A 5-column, 4-row table (header included), 20 characters per cell,
    // drawn 15 lines into the document with 3 spaces of cell indentation.
    let spec = TableSpec::new(5, 4, 20).origin(Point::new(0, 15)).indent(3);
    composite_spec(&mut canvas, &spec)?;

    add_row_content(
        &mut canvas,
        &spec,
        0,
        &["Part_Number", "Description", "Quantity", "Unit_Price", "Total"],
    )?;
    add_row_content(
        &mut canvas,
        &spec,
        1,
        &["MAX232", "Conversion", "15", "$0.3", "$4.5"],
    )?;

    write_to_path(&canvas, "invoice.txt")?;
    println!("wrote invoice.txt");
    Ok(())
}
