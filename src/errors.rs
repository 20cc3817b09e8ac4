//! Error types for board construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G003) for documentation lookup:
//!
//! - G001: `RaggedGrid` (Rows of unequal length)
//! - G002: `MalformedCell` (Cell is not empty, a letter, or a double tile)
//! - G003: `EmptyGrid` (Grid text contained no cells at all)
//!
//! # Examples
//!
//! ```
//! use tileword::errors::GridError;
//!
//! let err = GridError::MalformedCell {
//!     cell: "Q7".to_string(),
//!     row: 0,
//!     col: 1,
//! };
//! println!("Error: {}", err);
//! println!("Code: {}", err.code());
//! if let Some(help) = err.help() {
//!     println!("Help: {}", help);
//! }
//! ```

/// Custom error type for grid parsing and board construction.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The grid rows are not all the same length. The board builder treats
    /// this as a contract violation rather than guessing at bounds.
    #[error("ragged grid: row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell is not one of the three legal shapes: empty, a single letter,
    /// or two letters joined by the double-tile separator.
    #[error("malformed cell \"{cell}\" at row {row}, column {col}")]
    MalformedCell { cell: String, row: usize, col: usize },

    /// The grid text contained no cells at all.
    #[error("empty grid")]
    EmptyGrid,
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::RaggedGrid { .. } => "G001",
            GridError::MalformedCell { .. } => "G002",
            GridError::EmptyGrid => "G003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::RaggedGrid { .. } => {
                Some("Every row must list the same number of cells; pad holes with '.'")
            }
            GridError::MalformedCell { .. } => {
                Some("A cell is '.', a single letter, or two letters joined by '/' (e.g. 'Q/U')")
            }
            GridError::EmptyGrid => {
                Some("Example: 'C,A;T,S' is a 2x2 board with rows 'C A' and 'T S'")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = GridError::EmptyGrid;
        assert_eq!(err.code(), "G003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("G003"));
        assert!(detailed.contains("2x2"));
    }

    #[test]
    fn test_ragged_grid_includes_values() {
        let err = GridError::RaggedGrid {
            row: 2,
            expected: 4,
            actual: 3,
        };
        let detailed = err.display_detailed();
        assert!(detailed.contains("row 2"));
        assert!(detailed.contains('4') && detailed.contains('3'));
    }

    /// Test that all `GridError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors: Vec<GridError> = vec![
            GridError::RaggedGrid {
                row: 0,
                expected: 2,
                actual: 1,
            },
            GridError::MalformedCell {
                cell: "XY".to_string(),
                row: 0,
                col: 0,
            },
            GridError::EmptyGrid,
        ];

        for err in errors {
            let code = err.code();
            assert!(
                code.starts_with('G'),
                "Error code '{}' should start with 'G'",
                code
            );
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn test_malformed_cell_names_position() {
        let err = GridError::MalformedCell {
            cell: "Q7".to_string(),
            row: 1,
            col: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Q7"));
        assert!(msg.contains("row 1"));
        assert!(msg.contains("column 3"));
    }
}
