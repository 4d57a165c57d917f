use crate::matrix_store::Dimension;

/// All the ways constructing or combining stores can go wrong.
/// Every failure is raised at the offending call and no partially
/// built vector or matrix escapes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinAlgError {
    #[error("array of length {length} cannot fill a square matrix, the length must be a perfect square")]
    InvalidSize { length: usize },
    #[error("dimension mismatch between operands: {left} vs {right}")]
    DimensionMismatch { left: Dimension, right: Dimension },
    #[error("a linear system needs a square coefficient matrix, got {width}x{height}")]
    NonSquareSystem { width: Dimension, height: Dimension },
}
