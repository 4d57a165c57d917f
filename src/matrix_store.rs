use num::traits::ToPrimitive;

use crate::errors::LinAlgError;
use crate::field_generals::Ring;

pub type Dimension = usize;

/// A fixed length column of scalars.
/// The length is set at construction and never changes, the binary
/// operations allocate fresh columns and leave their operands alone.
pub trait VectorStore<F: Ring>: Sized {
    fn length(&self) -> Dimension;
    fn entry(&self, index: Dimension) -> &F;
    fn entry_mut(&mut self, index: Dimension) -> &mut F;
    /// `DimensionMismatch` when the lengths disagree
    fn sum(&self, other: &Self) -> Result<Self, LinAlgError>;
    /// `DimensionMismatch` when the lengths disagree
    fn sub(&self, other: &Self) -> Result<Self, LinAlgError>;
    fn l2_norm(&self) -> f64
    where
        F: ToPrimitive;
}

/// A two dimensional store of scalars addressed by (column x, row y).
/// Only square stores exist in this crate so far but the contract keeps
/// width and height apart so a rectangular store can join later without
/// touching the solver.
pub trait MatrixStore<F: Ring>: Sized {
    type ColumnVector: VectorStore<F>;
    fn width(&self) -> Dimension;
    fn height(&self) -> Dimension;
    fn dimensions(&self) -> (Dimension, Dimension) {
        (self.width(), self.height())
    }
    fn determinant(&self) -> F;
    fn transpose(&self) -> Self;
    fn checked_add(&self, other: &Self) -> Result<Self, LinAlgError>;
    fn checked_sub(&self, other: &Self) -> Result<Self, LinAlgError>;
    fn checked_mul(&self, other: &Self) -> Result<Self, LinAlgError>;
    fn scale(&self, scalar: F) -> Self;
    fn mul_vector(&self, vector: &Self::ColumnVector) -> Result<Self::ColumnVector, LinAlgError>;
    /// a fresh matrix with column `index` overwritten by `column`,
    /// the receiver is untouched
    fn with_column(&self, index: Dimension, column: &Self::ColumnVector) -> Self;
}

mod test {

    #[test]
    fn contract_through_the_traits() {
        use super::{MatrixStore, VectorStore};
        use crate::dense_store::{DenseVector, SquareMatrix};

        // twice the identity scales a column by two
        let doubler = SquareMatrix::<i64>::identity(2).scale(2);
        let mut x = DenseVector::<i64>::zeros(2);
        *VectorStore::entry_mut(&mut x, 0) = 2;
        *VectorStore::entry_mut(&mut x, 1) = 3;
        assert_eq!(*VectorStore::entry(&x, 1), 3);

        let b = MatrixStore::mul_vector(&doubler, &x).unwrap();
        let expected = DenseVector::new(vec![4, 6]);
        assert_eq!(VectorStore::sub(&b, &expected).unwrap().l2_norm(), 0.0);
        assert_eq!(MatrixStore::dimensions(&doubler), (2, 2));
        assert_eq!(MatrixStore::determinant(&doubler), 4);
    }
}
