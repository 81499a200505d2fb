//! # plaintable
//!
//! Draw ASCII table layouts onto fixed-size plain-text canvases.
//!
//! A [`Canvas`] is a rectangular character document. A [`TableSpec`]
//! describes a table's geometry and placement; drawing it yields a
//! [`TableBlock`] that is composited into the canvas at the spec's origin.
//! Field content is then written into individual cells, and the canvas is
//! serialized to text (or straight to a file).
//!
//! ## Quick Start
//!
//! ```
//! use plaintable::prelude::*;
//!
//! let mut canvas = Canvas::new(20, 60).unwrap();
//! let spec = TableSpec::new(3, 2, 12).origin(Point::new(2, 1)).indent(1);
//! composite_spec(&mut canvas, &spec).unwrap();
//! add_row_content(&mut canvas, &spec, 0, &["Part", "Qty", "Price"]).unwrap();
//! add_row_content(&mut canvas, &spec, 1, &["MAX232", "15", "$0.3"]).unwrap();
//! let text = canvas.render();
//! assert!(text.contains("MAX232"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Canvas**: the document surface, a fixed grid of characters
//! - **TableSpec**: table geometry (columns, rows, cell width) and placement
//! - **TableBlock**: the rendered border grid before compositing
//! - **Compositing**: copying a block into the canvas at an offset
//! - **Content**: field strings written into cell regions after compositing

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod compose;
pub mod content;
pub mod document;
pub mod error;
pub mod table;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::canvas::{Canvas, Point};
    pub use crate::compose::{composite, composite_spec};
    pub use crate::content::{add_row_content, cell_text};
    pub use crate::document::write_to_path;
    pub use crate::error::TableError;
    pub use crate::table::{TableBlock, TableSpec};
}

// Re-export key types at crate root
pub use canvas::{Canvas, Point};
pub use error::TableError;
pub use table::{TableBlock, TableSpec};
