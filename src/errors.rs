//! Error types for grid construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E003) for documentation lookup:
//!
//! - E001: `WrongLength` (Character count does not match the grid dimension)
//! - E002: `NonAlphabetic` (A grid character is not a letter)
//! - E003: `ZeroDimension` (Grid dimension of zero)
//!
//! # Examples
//!
//! ```
//! use wordhunt::grid::Grid;
//!
//! match Grid::build(4, "toofewletters") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for grid construction
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("expected {expected} characters for a {dimension}x{dimension} grid, got {actual}")]
    WrongLength {
        dimension: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid character '{invalid_char}' at position {position} (only letters a-z/A-Z allowed)")]
    NonAlphabetic { invalid_char: char, position: usize },

    #[error("grid dimension must be at least 1")]
    ZeroDimension,
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::WrongLength { .. } => "E001",
            GridError::NonAlphabetic { .. } => "E002",
            GridError::ZeroDimension => "E003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::WrongLength { .. } => Some("Pass every grid letter in row-major order with no separators (e.g., 16 letters for a 4x4 grid)"),
            GridError::NonAlphabetic { .. } => Some("Grid cells hold single letters; remove digits, spaces, and punctuation"),
            GridError::ZeroDimension => Some("Use a dimension of at least 1 (the classic Word Hunt board is 4)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
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
        let err = GridError::ZeroDimension;
        assert_eq!(err.code(), "E003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("dimension"));
    }

    #[test]
    fn test_wrong_length_message_includes_counts() {
        let err = GridError::WrongLength { dimension: 4, expected: 16, actual: 15 };
        assert_eq!(err.code(), "E001");
        let detailed = err.display_detailed();
        assert!(detailed.contains("16"));
        assert!(detailed.contains("15"));
    }

    /// Test that all `GridError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        // Sample one of each variant
        let errors: Vec<GridError> = vec![
            GridError::WrongLength { dimension: 4, expected: 16, actual: 15 },
            GridError::NonAlphabetic { invalid_char: '7', position: 3 },
            GridError::ZeroDimension,
        ];

        for err in errors {
            let code = err.code();
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn test_non_alphabetic_shows_offending_char() {
        let err = GridError::NonAlphabetic { invalid_char: '!', position: 9 };
        let msg = err.to_string();
        assert!(msg.contains('!'));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_io_error_conversion_preserves_message() {
        let err = GridError::ZeroDimension;
        let msg = err.to_string();
        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains(&msg));
    }
}
