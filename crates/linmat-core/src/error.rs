use thiserror::Error;

use crate::index::{MatrixEntry, MatrixSize};

/// An error type for matrix operations.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// Coordinates outside the current bounds of the matrix.
    ///
    /// For row operations the column component is zero and the row component is the
    /// offending row index.
    #[error("Invalid indices {pos}: position is outside the matrix bounds")]
    InvalidIndices {
        /// The offending coordinate.
        pos: MatrixEntry,
    },

    /// The rows handed to a constructor do not all have the same length.
    #[error("Invalid vec of rows: {0}")]
    InvalidVecOfRows(String),

    /// The operands of a binary operation have sizes that do not fit together.
    #[error("Incompatible sizes {lhs} and {rhs} for {op}")]
    IncompatibleSizes {
        /// Name of the operation that was attempted.
        op: &'static str,
        /// Size of the left operand.
        lhs: MatrixSize,
        /// Size of the right operand.
        rhs: MatrixSize,
    },
}

impl MatrixError {
    /// Creates an InvalidIndices error for the given position.
    pub fn invalid_indices(pos: impl Into<MatrixEntry>) -> Self {
        Self::InvalidIndices { pos: pos.into() }
    }

    /// Creates an InvalidIndices error for a row index.
    pub fn invalid_row(row: usize) -> Self {
        Self::InvalidIndices {
            pos: MatrixEntry::new(0, row),
        }
    }

    /// Creates an IncompatibleSizes error for the named operation.
    pub fn incompatible_sizes(op: &'static str, lhs: MatrixSize, rhs: MatrixSize) -> Self {
        Self::IncompatibleSizes { op, lhs, rhs }
    }
}

/// An error type for vector operations.
#[derive(Error, Debug, PartialEq)]
pub enum VectorError {
    /// Index exceeds the vector length.
    #[error("Invalid index {index} for vector of size {size}")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// The size of the vector.
        size: usize,
    },

    /// The two operands of an elementwise operation differ in length.
    #[error("Incompatible vector sizes {lhs} and {rhs} for {op}")]
    IncompatibleVectorSizes {
        /// Name of the operation that was attempted.
        op: &'static str,
        /// Size of the left operand.
        lhs: usize,
        /// Size of the right operand.
        rhs: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{MatrixError, VectorError};
    use crate::index::MatrixIndices;

    #[test]
    fn messages_carry_payload() {
        let err = MatrixError::invalid_indices((2, 0));
        assert_eq!(
            err,
            MatrixError::InvalidIndices {
                pos: MatrixIndices::new(2, 0)
            }
        );
        assert!(err.to_string().contains("(2, 0)"));

        let err = MatrixError::incompatible_sizes(
            "matrix product",
            MatrixIndices::new(2, 3),
            MatrixIndices::new(2, 3),
        );
        assert_eq!(
            err.to_string(),
            "Incompatible sizes (2, 3) and (2, 3) for matrix product"
        );

        let err = VectorError::InvalidIndex { index: 4, size: 2 };
        assert_eq!(err.to_string(), "Invalid index 4 for vector of size 2");
    }
}
