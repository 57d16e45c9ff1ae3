//! Shape and bounds errors.

/// Errors raised by fallible matrix and conversion operations.
///
/// Every failing operation reports its error before producing a result;
/// there is no partial success. Operator sugar (`+`, `-`, `*` between
/// matrices) delegates to the fallible methods and panics with the same
/// error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// A matrix was constructed with a zero width or height.
    #[error("matrix dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A column index exceeded the width of the matrix.
    #[error("column index {column} exceeds matrix width {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    /// A row index exceeded the height of the matrix.
    #[error("row index {row} exceeds matrix height {height}")]
    RowOutOfRange { row: usize, height: usize },

    /// Two matrices had incompatible shapes for the attempted operation.
    ///
    /// For elementwise operations both shapes must match exactly; for the
    /// matrix product the left operand's width must equal the right
    /// operand's height.
    #[error("matrix shapes {left:?} and {right:?} are incompatible")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A row/column mapping callback returned a matrix of the wrong shape.
    #[error("callback returned a {got:?} matrix where {expected:?} was required")]
    InvalidShape {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A matrix-to-vector conversion was attempted on a matrix that is
    /// neither `1xN` nor `Nx1` for the requested component count.
    #[error("expected a 1x{len} or {len}x1 matrix, got {width}x{height}")]
    ShapeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    /// The determinant was requested for a non-square matrix.
    #[error("determinant requires a square matrix, got {width}x{height}")]
    SquareRequired { width: usize, height: usize },
}

/// Result type used by the fallible operations in this crate.
pub type Result<T, E = MathError> = std::result::Result<T, E>;
