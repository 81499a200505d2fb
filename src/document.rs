//! Writing a finished canvas to a text file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::TableError;

/// Render `canvas` and write it to `path`, overwriting existing content.
///
/// The write is a single scoped operation: the file handle is closed on
/// every path, and an I/O failure propagates unchanged with no fallback or
/// partial-write recovery.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be created or written.
pub fn write_to_path<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<(), TableError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(canvas.render().as_bytes())?;
    log::debug!(
        "wrote {}x{} document to {}",
        canvas.line_length(),
        canvas.lines(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_write_and_overwrite() {
        let dir = std::env::temp_dir().join("plaintable_doc_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");

        let canvas = Canvas::new(2, 3).unwrap();
        write_to_path(&canvas, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "   \n   ");

        let mut updated = canvas.clone();
        updated.set(0, 0, '#').unwrap();
        write_to_path(&updated, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#  \n   ");

        std::fs::remove_file(&path).unwrap();
    }

    #[test_log::test]
    fn test_missing_directory_propagates_io_error() {
        let canvas = Canvas::new(1, 1).unwrap();
        let path = std::env::temp_dir()
            .join("plaintable_no_such_dir")
            .join("out.txt");
        assert!(matches!(
            write_to_path(&canvas, path),
            Err(TableError::Io(_))
        ));
    }
}
