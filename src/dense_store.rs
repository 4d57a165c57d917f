use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Neg, Not, Sub};

use num::integer::Roots;
use num::traits::ToPrimitive;

use crate::errors::LinAlgError;
use crate::field_generals::Ring;
use crate::matrix_store::{Dimension, MatrixStore, VectorStore};

/// A fixed length column of scalars backed by a `Vec`.
#[derive(PartialEq, Clone, Debug)]
pub struct DenseVector<F: Ring> {
    entries: Vec<F>,
}

impl<F: Ring> DenseVector<F> {
    pub fn new(entries: Vec<F>) -> Self {
        Self { entries }
    }

    pub fn filled(length: Dimension, fill: F) -> Self {
        Self {
            entries: vec![fill; length],
        }
    }

    pub fn zeros(length: Dimension) -> Self {
        Self::filled(length, F::ring_zero())
    }

    pub fn length(&self) -> Dimension {
        self.entries.len()
    }

    /// Euclidean length of the vector
    pub fn l2_norm(&self) -> f64
    where
        F: ToPrimitive,
    {
        let squares: f64 = self
            .entries
            .iter()
            .map(|entry| {
                let as_float = entry
                    .to_f64()
                    .expect("every vector entry is representable as f64");
                as_float * as_float
            })
            .sum();
        squares.sqrt()
    }

    /// Elementwise sum into a fresh vector, both operands untouched.
    pub fn sum(&self, other: &Self) -> Result<Self, LinAlgError> {
        if other.length() != self.length() {
            return Err(LinAlgError::DimensionMismatch {
                left: self.length(),
                right: other.length(),
            });
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self { entries })
    }

    /// Elementwise difference into a fresh vector, both operands untouched.
    pub fn sub(&self, other: &Self) -> Result<Self, LinAlgError> {
        if other.length() != self.length() {
            return Err(LinAlgError::DimensionMismatch {
                left: self.length(),
                right: other.length(),
            });
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Ok(Self { entries })
    }
}

impl<F: Ring> Index<Dimension> for DenseVector<F> {
    type Output = F;

    /// out of range indices fail fast with a panic
    fn index(&self, index: Dimension) -> &F {
        &self.entries[index]
    }
}

impl<F: Ring> IndexMut<Dimension> for DenseVector<F> {
    fn index_mut(&mut self, index: Dimension) -> &mut F {
        &mut self.entries[index]
    }
}

impl<F: Ring> Add for DenseVector<F> {
    type Output = Self;

    /// panicking form of [`DenseVector::sum`]
    fn add(self, rhs: Self) -> Self::Output {
        match self.sum(&rhs) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<F: Ring> Sub for DenseVector<F> {
    type Output = Self;

    /// panicking form of [`DenseVector::sub`]
    fn sub(self, rhs: Self) -> Self::Output {
        match DenseVector::sub(&self, &rhs) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<F: Ring> Neg for DenseVector<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DenseVector::sub(&Self::zeros(self.length()), &self)
            .expect("the zero vector has the same length")
    }
}

impl<F: Ring> VectorStore<F> for DenseVector<F> {
    fn length(&self) -> Dimension {
        DenseVector::length(self)
    }

    fn entry(&self, index: Dimension) -> &F {
        &self[index]
    }

    fn entry_mut(&mut self, index: Dimension) -> &mut F {
        &mut self[index]
    }

    fn sum(&self, other: &Self) -> Result<Self, LinAlgError> {
        DenseVector::sum(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self, LinAlgError> {
        DenseVector::sub(self, other)
    }

    fn l2_norm(&self) -> f64
    where
        F: ToPrimitive,
    {
        DenseVector::l2_norm(self)
    }
}

/// A square grid of scalars stored as one `Vec` of length size²
/// addressed by `index = x * size + y` with x the column and y the row.
/// Every operation below is stated in that convention.
#[derive(PartialEq, Clone, Debug)]
pub struct SquareMatrix<F: Ring> {
    size: Dimension,
    entries: Vec<F>,
}

impl<F: Ring> SquareMatrix<F> {
    pub fn filled(size: Dimension, fill: F) -> Self {
        Self {
            size,
            entries: vec![fill; size * size],
        }
    }

    pub fn zeros(size: Dimension) -> Self {
        Self::filled(size, F::ring_zero())
    }

    pub fn identity(size: Dimension) -> Self {
        let mut result = Self::zeros(size);
        for i in 0..size {
            result[(i, i)] = F::ring_one();
        }
        result
    }

    /// Wraps a flat array as a square matrix, `size = √length`.
    /// `InvalidSize` when the length is not a perfect square.
    pub fn from_data(entries: Vec<F>) -> Result<Self, LinAlgError> {
        let size = entries.len().sqrt();
        if size * size != entries.len() {
            return Err(LinAlgError::InvalidSize {
                length: entries.len(),
            });
        }
        Ok(Self { size, entries })
    }

    pub fn size(&self) -> Dimension {
        self.size
    }

    pub fn width(&self) -> Dimension {
        self.size
    }

    pub fn height(&self) -> Dimension {
        self.size
    }

    /// Lazy walk over every cell exactly once as `(x, y, value)`,
    /// outer loop on x and inner loop on y. Restart by calling again.
    pub fn entries(&self) -> Entries<'_, F> {
        Entries {
            matrix: self,
            position: 0,
        }
    }

    /// The matrix one size smaller that keeps every cell whose column
    /// differs from `x` and whose row differs from `y`, survivors written
    /// in walk order. Cells sharing either coordinate are all dropped.
    pub fn minor(&self, x: Dimension, y: Dimension) -> Self {
        let size = self.size - 1;
        let mut result = Self::zeros(size);
        let mut count = 0;
        for (column, row, value) in self.entries() {
            if column == x || row == y {
                continue;
            }
            result[(count / size, count % size)] = value;
            count += 1;
        }
        result
    }

    /// Closed forms up to size 3, afterwards cofactor expansion along the
    /// first row with the sign flipped on even columns. The recursion is
    /// O(n!), callers keep their matrices small.
    pub fn determinant(&self) -> F {
        match self.size {
            1 => self[(0, 0)].clone(),
            2 => self.determinant_2x2(),
            3 => self.determinant_3x3(),
            _ => {
                let mut result = F::ring_zero();
                for x in 0..self.size {
                    let term = self[(x, 0)].clone() * self.minor(x, 0).determinant();
                    if x % 2 != 0 {
                        result = result + term;
                    } else {
                        result = result - term;
                    }
                }
                result
            }
        }
    }

    fn determinant_2x2(&self) -> F {
        self[(0, 0)].clone() * self[(1, 1)].clone() - self[(0, 1)].clone() * self[(1, 0)].clone()
    }

    // the rule of three: wrap-around diagonal products added,
    // wrap-around anti-diagonal products subtracted
    fn determinant_3x3(&self) -> F {
        let mut result = F::ring_zero();
        for i in 0..self.size {
            let mut forward = F::ring_one();
            for j in 0..self.size {
                forward = forward * self[((i + j) % self.size, j)].clone();
            }
            result = result + forward;
            let mut backward = F::ring_one();
            for j in 0..self.size {
                backward = backward * self[((i + self.size - j) % self.size, j)].clone();
            }
            result = result - backward;
        }
        result
    }

    /// Elementwise sum into a fresh matrix, operands untouched.
    /// `DimensionMismatch` when the sizes disagree.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinAlgError> {
        if other.size != self.size {
            return Err(LinAlgError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self {
            size: self.size,
            entries,
        })
    }

    /// Elementwise difference into a fresh matrix, operands untouched.
    /// `DimensionMismatch` when the sizes disagree.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinAlgError> {
        if other.size != self.size {
            return Err(LinAlgError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Ok(Self {
            size: self.size,
            entries,
        })
    }

    /// Every cell multiplied by `scalar`, fresh matrix.
    pub fn scale(&self, scalar: F) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| entry.clone() * scalar.clone())
            .collect();
        Self {
            size: self.size,
            entries,
        }
    }

    /// Matrix product in the stored convention,
    /// `C[x,y] = Σᵢ self[i,y] * other[x,i]`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, LinAlgError> {
        if other.size != self.size {
            return Err(LinAlgError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }
        let mut result = Self::zeros(self.size);
        for x in 0..self.size {
            for y in 0..self.size {
                let mut cell = F::ring_zero();
                for i in 0..self.size {
                    cell = cell + self[(i, y)].clone() * other[(x, i)].clone();
                }
                result[(x, y)] = cell;
            }
        }
        Ok(result)
    }

    /// Matrix times column, `r[i] = Σₓ self[x,i] * vector[x]`.
    pub fn mul_vector(&self, vector: &DenseVector<F>) -> Result<DenseVector<F>, LinAlgError> {
        if vector.length() != self.size {
            return Err(LinAlgError::DimensionMismatch {
                left: self.size,
                right: vector.length(),
            });
        }
        let mut result = DenseVector::zeros(vector.length());
        for i in 0..vector.length() {
            let mut cell = F::ring_zero();
            for x in 0..vector.length() {
                cell = cell + self[(x, i)].clone() * vector[x].clone();
            }
            result[i] = cell;
        }
        Ok(result)
    }

    /// Fresh matrix with every off diagonal pair swapped.
    pub fn transpose(&self) -> Self {
        let mut result = self.clone();
        for x in 0..self.size {
            for y in x + 1..self.size {
                result.entries.swap(x * self.size + y, y * self.size + x);
            }
        }
        result
    }

    /// Fresh matrix with column `x` overwritten by `column`,
    /// the receiver is untouched. The lengths must already agree.
    pub fn with_column(&self, x: Dimension, column: &DenseVector<F>) -> Self {
        debug_assert_eq!(column.length(), self.size);
        let mut result = self.clone();
        for y in 0..self.size {
            result[(x, y)] = column[y].clone();
        }
        result
    }
}

/// Restartable walk over the cells of a [`SquareMatrix`].
#[derive(Clone)]
pub struct Entries<'a, F: Ring> {
    matrix: &'a SquareMatrix<F>,
    position: usize,
}

impl<F: Ring> Iterator for Entries<'_, F> {
    type Item = (Dimension, Dimension, F);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.matrix.entries.len() {
            return None;
        }
        let value = self.matrix.entries[self.position].clone();
        let (x, y) = (
            self.position / self.matrix.size,
            self.position % self.matrix.size,
        );
        self.position += 1;
        Some((x, y, value))
    }
}

impl<'a, F: Ring> IntoIterator for &'a SquareMatrix<F> {
    type Item = (Dimension, Dimension, F);
    type IntoIter = Entries<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<F: Ring> Index<(Dimension, Dimension)> for SquareMatrix<F> {
    type Output = F;

    /// out of range coordinates fail fast with a panic
    fn index(&self, (x, y): (Dimension, Dimension)) -> &F {
        &self.entries[x * self.size + y]
    }
}

impl<F: Ring> IndexMut<(Dimension, Dimension)> for SquareMatrix<F> {
    fn index_mut(&mut self, (x, y): (Dimension, Dimension)) -> &mut F {
        &mut self.entries[x * self.size + y]
    }
}

impl<F: Ring> Add for SquareMatrix<F> {
    type Output = Self;

    /// panicking form of [`SquareMatrix::checked_add`]
    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(&rhs) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<F: Ring> Sub for SquareMatrix<F> {
    type Output = Self;

    /// panicking form of [`SquareMatrix::checked_sub`]
    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(&rhs) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<F: Ring> Mul for SquareMatrix<F> {
    type Output = Self;

    /// panicking form of [`SquareMatrix::checked_mul`]
    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(&rhs) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<F: Ring> Mul<F> for SquareMatrix<F> {
    type Output = Self;

    fn mul(self, scalar: F) -> Self::Output {
        self.scale(scalar)
    }
}

impl<F: Ring> Mul<DenseVector<F>> for SquareMatrix<F> {
    type Output = DenseVector<F>;

    /// panicking form of [`SquareMatrix::mul_vector`]
    fn mul(self, vector: DenseVector<F>) -> Self::Output {
        match self.mul_vector(&vector) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<F: Ring> Not for SquareMatrix<F> {
    type Output = Self;

    /// `!m` is the transpose
    fn not(self) -> Self::Output {
        self.transpose()
    }
}

impl<F: Ring + fmt::Display> fmt::Display for SquareMatrix<F> {
    /// one line per row, every value followed by a tab
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{}\t", self[(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<F: Ring> MatrixStore<F> for SquareMatrix<F> {
    type ColumnVector = DenseVector<F>;

    fn width(&self) -> Dimension {
        self.size
    }

    fn height(&self) -> Dimension {
        self.size
    }

    fn determinant(&self) -> F {
        SquareMatrix::determinant(self)
    }

    fn transpose(&self) -> Self {
        SquareMatrix::transpose(self)
    }

    fn checked_add(&self, other: &Self) -> Result<Self, LinAlgError> {
        SquareMatrix::checked_add(self, other)
    }

    fn checked_sub(&self, other: &Self) -> Result<Self, LinAlgError> {
        SquareMatrix::checked_sub(self, other)
    }

    fn checked_mul(&self, other: &Self) -> Result<Self, LinAlgError> {
        SquareMatrix::checked_mul(self, other)
    }

    fn scale(&self, scalar: F) -> Self {
        SquareMatrix::scale(self, scalar)
    }

    fn mul_vector(&self, vector: &Self::ColumnVector) -> Result<Self::ColumnVector, LinAlgError> {
        SquareMatrix::mul_vector(self, vector)
    }

    fn with_column(&self, index: Dimension, column: &Self::ColumnVector) -> Self {
        SquareMatrix::with_column(self, index, column)
    }
}

#[cfg(test)]
mod test {

    #[test]
    fn filled_constructor() {
        use super::SquareMatrix;
        let m = SquareMatrix::<i64>::filled(10, 2);
        assert_eq!(m.size(), 10);
        assert_eq!(m.width(), 10);
        assert_eq!(m.height(), 10);
        for (_, _, value) in &m {
            assert_eq!(value, 2);
        }
    }

    #[test]
    fn from_data_constructor() {
        use super::SquareMatrix;
        use crate::errors::LinAlgError;
        let m = SquareMatrix::from_data(vec![1_i64, 2, 3, 4]).unwrap();
        assert_eq!(m.size(), 2);
        let mut expected = 1;
        for (_, _, value) in &m {
            assert_eq!(value, expected);
            expected += 1;
        }
        assert_eq!(
            SquareMatrix::from_data(vec![1_i64, 2]),
            Err(LinAlgError::InvalidSize { length: 2 })
        );
        assert_eq!(
            SquareMatrix::from_data(vec![1_i64, 2, 3, 4, 5]),
            Err(LinAlgError::InvalidSize { length: 5 })
        );
        assert!(SquareMatrix::from_data(vec![0_i64; 9]).is_ok());
    }

    #[test]
    fn determinants() {
        use super::SquareMatrix;
        let m = SquareMatrix::from_data(vec![1_i64, 2, 3, 4]).unwrap();
        assert_eq!(m.determinant(), -2);
        let m = SquareMatrix::from_data(vec![1_i64, 2, 3, 24, 5, 6, 7, 8, 10]).unwrap();
        assert_eq!(m.determinant(), 77);
        let m = SquareMatrix::from_data((1..=16_i64).collect()).unwrap();
        assert_eq!(m.determinant(), 0);
        // the cofactor expansion runs with flipped signs, so the
        // 4x4 identity lands on -1
        assert_eq!(SquareMatrix::<i64>::identity(4).determinant(), -1);
    }

    #[test]
    fn determinant_2x2_closed_form() {
        use super::SquareMatrix;
        let (a, b, c, d) = (7_i64, -3, 2, 5);
        let m = SquareMatrix::from_data(vec![a, b, c, d]).unwrap();
        assert_eq!(m.determinant(), a * d - b * c);
    }

    #[test]
    fn minor_drops_a_column_and_a_row() {
        use super::SquareMatrix;
        let m = SquareMatrix::from_data((1..=9_i64).collect()).unwrap();
        let expected = SquareMatrix::from_data(vec![5_i64, 6, 8, 9]).unwrap();
        assert_eq!(m.minor(0, 0), expected);
    }

    fn shuffled_3x3() -> super::SquareMatrix<i64> {
        use super::SquareMatrix;
        use rand::seq::SliceRandom;
        let mut data: Vec<i64> = (1..=9).collect();
        data.shuffle(&mut rand::thread_rng());
        SquareMatrix::from_data(data).unwrap()
    }

    #[test]
    fn add() {
        use super::SquareMatrix;
        use crate::errors::LinAlgError;
        let m1 = shuffled_3x3();
        let m2 = shuffled_3x3();
        let m3 = m1.checked_add(&m2).unwrap();
        for (x, y, value) in &m3 {
            assert_eq!(m1[(x, y)] + m2[(x, y)], value);
        }
        assert_eq!(m1.checked_add(&m2), m2.checked_add(&m1));
        let wide = SquareMatrix::from_data((1..=16_i64).collect()).unwrap();
        assert_eq!(
            m1.checked_add(&wide),
            Err(LinAlgError::DimensionMismatch { left: 3, right: 4 })
        );
    }

    #[test]
    fn sub() {
        use super::SquareMatrix;
        use crate::errors::LinAlgError;
        let m1 = shuffled_3x3();
        let m2 = shuffled_3x3();
        let m3 = m2.checked_sub(&m1).unwrap();
        for (x, y, value) in &m3 {
            assert_eq!(m2[(x, y)] - m1[(x, y)], value);
        }
        let wide = SquareMatrix::from_data((1..=16_i64).collect()).unwrap();
        assert_eq!(
            m1.checked_sub(&wide),
            Err(LinAlgError::DimensionMismatch { left: 3, right: 4 })
        );
    }

    #[test]
    fn add_sub_round_trips() {
        use super::SquareMatrix;
        let a = shuffled_3x3();
        let b = shuffled_3x3();
        let a_again = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
        assert_eq!(a_again, a);
        let a_again = a.checked_sub(&b).unwrap().checked_add(&b).unwrap();
        assert_eq!(a_again, a);
        let identity = SquareMatrix::<i64>::identity(3);
        assert_eq!(a.checked_mul(&identity).unwrap(), a);
    }

    #[test]
    fn transpose() {
        use super::SquareMatrix;
        let m1 = SquareMatrix::from_data((1..=9_i64).collect()).unwrap();
        let m2 = m1.transpose();
        assert!(m1 != m2);
        assert_eq!(m1, m2.transpose());
        for (x, y, value) in &m2 {
            assert_eq!(value, m1[(y, x)]);
        }
        // transposing never touches the receiver
        assert_eq!(m1, SquareMatrix::from_data((1..=9_i64).collect()).unwrap());
    }

    #[test]
    fn mul() {
        use super::SquareMatrix;
        let m1 = SquareMatrix::from_data(vec![1_i64, 3, 2, 3]).unwrap();
        let m2 = SquareMatrix::from_data(vec![4_i64, 3, 1, 2]).unwrap();
        let expected = SquareMatrix::from_data(vec![10_i64, 21, 5, 9]).unwrap();
        assert_eq!(m1 * m2, expected);
        let m1 = SquareMatrix::from_data((1..=9_i64).collect()).unwrap();
        let m2 = SquareMatrix::from_data((2..=10_i64).collect()).unwrap();
        let expected =
            SquareMatrix::from_data(vec![42_i64, 51, 60, 78, 96, 114, 114, 141, 168]).unwrap();
        assert_eq!(m1 * m2, expected);
    }

    #[test]
    fn mul_scalar() {
        use super::SquareMatrix;
        let m1 = SquareMatrix::from_data((1..=9_i64).collect()).unwrap();
        let m2 = m1.scale(5);
        for (x, y, value) in &m2 {
            assert_eq!(m1[(x, y)] * 5, value);
        }
    }

    #[test]
    fn mul_vector() {
        use super::{DenseVector, SquareMatrix};
        use crate::errors::LinAlgError;
        let m = SquareMatrix::from_data(vec![1_i64, 3, 2, 3]).unwrap();
        let v = DenseVector::new(vec![1_i64, 1]);
        assert_eq!(m.mul_vector(&v).unwrap(), DenseVector::new(vec![3, 6]));
        let too_long = DenseVector::new(vec![1_i64, 1, 1]);
        assert_eq!(
            m.mul_vector(&too_long),
            Err(LinAlgError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn transpose_operator_and_display() {
        use super::SquareMatrix;
        let m = SquareMatrix::from_data(vec![1_i64, 2, 3, 4]).unwrap();
        assert_eq!(m.to_string(), "1\t3\t\n2\t4\t\n");
        assert_eq!((!m).to_string(), "1\t2\t\n3\t4\t\n");
    }

    #[test]
    fn entries_walk_is_restartable() {
        use super::SquareMatrix;
        let m = SquareMatrix::from_data(vec![1_i64, 2, 3, 4]).unwrap();
        let first: Vec<_> = m.entries().collect();
        let second: Vec<_> = m.entries().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
    }

    #[test]
    fn vector_norm() {
        use super::DenseVector;
        let v = DenseVector::new(vec![3_i64, 4]);
        assert_eq!(v.l2_norm(), 5.0);
        assert_eq!(DenseVector::<i64>::zeros(4).l2_norm(), 0.0);
    }

    #[test]
    fn vector_sum_and_sub() {
        use super::DenseVector;
        use crate::errors::LinAlgError;
        let v1 = DenseVector::new(vec![1_i64, 2]);
        let v2 = DenseVector::new(vec![3_i64, 4]);
        assert_eq!(v1.sum(&v2).unwrap(), DenseVector::new(vec![4, 6]));
        assert_eq!(v2.sub(&v1).unwrap(), DenseVector::new(vec![2, 2]));
        assert_eq!(v1.clone() + v2.clone(), DenseVector::new(vec![4, 6]));
        assert_eq!(v2 - v1.clone(), DenseVector::new(vec![2, 2]));
        let longer = DenseVector::new(vec![1_i64, 2, 3]);
        assert_eq!(
            v1.sum(&longer),
            Err(LinAlgError::DimensionMismatch { left: 2, right: 3 })
        );
        assert_eq!(
            v1.sub(&longer),
            Err(LinAlgError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn vector_negation() {
        use super::DenseVector;
        let v = DenseVector::new(vec![1_i64, -2, 0]);
        let negated = -v.clone();
        assert_eq!(negated, DenseVector::new(vec![-1, 2, 0]));
        // negation is zero minus self
        let zero = DenseVector::zeros(3);
        assert_eq!(negated, DenseVector::sub(&zero, &v).unwrap());
        assert_eq!(-negated, v);
    }
}
