//! `grid` — Text format for describing a board on the command line.
//!
//! In the full pipeline the grid arrives from the vision/OCR stage as a
//! rows x columns table of cell strings; the CLI stands in for that stage
//! with a compact text form:
//!
//! - rows are separated by `;`
//! - cells within a row are separated by `,`
//! - an empty cell or `.` is a hole
//! - two letters joined by `/` are a double tile
//!
//! So `C,A;T,S` is a 2x2 board and `Q/U,A,D` is one row holding a double
//! tile. Cell *contents* are validated later by the board builder; this
//! module only handles the row/cell framing.

use crate::errors::GridError;

/// Marker for a hole cell in the CLI grid format.
const HOLE_CELL: &str = ".";

/// Parses the CLI grid text into the rows x columns table the board
/// builder consumes. Whitespace around rows and cells is ignored.
///
/// # Errors
///
/// Returns [`GridError::EmptyGrid`] if the text contains no cells at all.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<String>>, GridError> {
    if text.trim().is_empty() {
        return Err(GridError::EmptyGrid);
    }

    let grid = text
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|cell| {
                    let cell = cell.trim();
                    if cell == HOLE_CELL {
                        String::new()
                    } else {
                        cell.to_string()
                    }
                })
                .collect()
        })
        .collect();

    Ok(grid)
}
