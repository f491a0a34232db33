//! Structured error types for the codonic toolkit.

use thiserror::Error;

/// Unified error type for all codonic operations.
#[derive(Debug, Error)]
pub enum CodonicError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A byte outside the alphabet of the resolved sequence kind.
    #[error("invalid {kind} base '{base}' at position {position}")]
    InvalidBase {
        kind: &'static str,
        base: char,
        position: usize,
    },

    /// Sequence holds both `T` and `U` and no kind was given.
    #[error("ambiguous sequence: contains both 'T' and 'U'")]
    AmbiguousNucleicAcid,
}

impl CodonicError {
    /// Whether this error was raised while validating sequence content,
    /// as opposed to a bad parameter or I/O failure.
    pub fn is_alphabet_error(&self) -> bool {
        matches!(
            self,
            CodonicError::InvalidBase { .. } | CodonicError::AmbiguousNucleicAcid
        )
    }
}

/// Convenience alias used throughout codonic.
pub type Result<T> = std::result::Result<T, CodonicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_message() {
        let err = CodonicError::InvalidBase {
            kind: "DNA",
            base: 'X',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid DNA base 'X' at position 3");
        assert!(err.is_alphabet_error());
    }

    #[test]
    fn parameter_errors_are_not_alphabet_errors() {
        let err = CodonicError::InvalidInput("frame must be 0, 1, or 2".into());
        assert!(!err.is_alphabet_error());
        assert!(CodonicError::AmbiguousNucleicAcid.is_alphabet_error());
    }

    #[test]
    fn io_from_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CodonicError = io.into();
        assert!(matches!(err, CodonicError::Io(_)));
    }
}
