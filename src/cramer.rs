use core::marker::PhantomData;

use log::debug;
use num::traits::ToPrimitive;

use crate::errors::LinAlgError;
use crate::field_generals::Ring;
use crate::matrix_store::{MatrixStore, VectorStore};

/// Outcome of solving `coefficients · x = free_coefficients`.
/// A zero main determinant is always reported as `None`, Cramer's rule
/// alone cannot tell an inconsistent system from one with infinitely
/// many solutions, so `Infinite` stays reserved for solvers that can.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionsResult {
    None,
    One(Vec<f64>),
    Infinite,
}

/// A square system of linear equations solved by Cramer's rule, one
/// determinant per unknown with the free column substituted in.
///
/// Substitution builds a fresh matrix each time, the stored coefficients
/// and free column are never mutated, which the `&self` receiver of
/// [`CramerSystem::solve`] makes plain. Determinant cost is O(n!) past
/// size 3, callers keep their systems small.
pub struct CramerSystem<F: Ring, M: MatrixStore<F>> {
    coefficients: M,
    free_coefficients: M::ColumnVector,
    ring_info: PhantomData<F>,
}

impl<F, M> CramerSystem<F, M>
where
    F: Ring + ToPrimitive,
    M: MatrixStore<F>,
{
    /// `NonSquareSystem` unless the store is square, then
    /// `DimensionMismatch` unless the free column is as long as the
    /// store is wide.
    pub fn new(coefficients: M, free_coefficients: M::ColumnVector) -> Result<Self, LinAlgError> {
        let (width, height) = coefficients.dimensions();
        if width != height {
            return Err(LinAlgError::NonSquareSystem { width, height });
        }
        if free_coefficients.length() != width {
            return Err(LinAlgError::DimensionMismatch {
                left: width,
                right: free_coefficients.length(),
            });
        }
        Ok(Self {
            coefficients,
            free_coefficients,
            ring_info: PhantomData,
        })
    }

    /// Replaces both sides of the system, same checks as [`CramerSystem::new`].
    pub fn set_system(
        &mut self,
        coefficients: M,
        free_coefficients: M::ColumnVector,
    ) -> Result<(), LinAlgError> {
        *self = Self::new(coefficients, free_coefficients)?;
        Ok(())
    }

    pub fn coefficients(&self) -> &M {
        &self.coefficients
    }

    pub fn free_coefficients(&self) -> &M::ColumnVector {
        &self.free_coefficients
    }

    pub fn solve(&self) -> SolutionsResult {
        let main_determinant = self.coefficients.determinant();
        if main_determinant == F::ring_zero() {
            debug!("the coefficient determinant is zero, no unique solution");
            return SolutionsResult::None;
        }
        let main_determinant = main_determinant
            .to_f64()
            .expect("every determinant is representable as f64");
        debug!("coefficient determinant {main_determinant}");
        let unknowns = self.coefficients.width();
        let mut result = Vec::with_capacity(unknowns);
        for i in 0..unknowns {
            let substituted = self.coefficients.with_column(i, &self.free_coefficients);
            let column_determinant = substituted
                .determinant()
                .to_f64()
                .expect("every determinant is representable as f64");
            debug!("column {i} substituted determinant {column_determinant}");
            result.push(column_determinant / main_determinant);
        }
        SolutionsResult::One(result)
    }
}
