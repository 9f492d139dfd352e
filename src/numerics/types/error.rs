// src/numerics/types/error.rs
// Error types returned by matrix construction, access and arithmetic.

/// Shape of a matrix as `(rows, columns)`.
pub type Shape = (usize, usize);

/// Convenience alias used throughout the matrix API.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur while building or operating on a [`Matrix`](super::matrix::Matrix).
///
/// Every error is terminal for the call that produced it: the operation has
/// no effect on its operands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// A requested dimension is zero, or the supplied values are not rectangular.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A required grid or operand was not supplied.
    #[error("Missing input: no {operand} was supplied")]
    NullInput { operand: &'static str },

    /// A row or column index lies outside the matrix.
    #[error("Index out of range: ({row}, {column}) is outside a {rows}x{columns} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Operand shapes are incompatible for the named operation.
    #[error("Dimension mismatch: cannot {operation} a {}x{} matrix with a {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },
}

/// Errors raised while building a configuration from a parameter string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch {
            operation: "multiply",
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: cannot multiply a 2x3 matrix with a 2x3 matrix"
        );
    }

    #[test]
    fn test_index_and_null_messages() {
        let err = MatrixError::IndexOutOfRange { row: 2, column: 0, rows: 2, columns: 2 };
        assert!(err.to_string().contains("(2, 0)"));
        assert!(err.to_string().contains("2x2"));

        let err = MatrixError::NullInput { operand: "grid" };
        assert_eq!(err.to_string(), "Missing input: no grid was supplied");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&MatrixError::InvalidDimension("0x1".to_string()));
        assert_error(&ConfigError::InvalidParameters("abs".to_string()));
    }
}
