use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, Mul, Neg};
use std::slice::Iter;

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::config::ToleranceConfig;
use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;
use crate::math::Scalar;

/// A fixed-dimension sequence of numbers.
///
/// The dimension is set at construction and never changes; there are no
/// mutable accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Number of elements.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the stored elements.
    pub fn elements(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Copy,
    {
        self.data.get(index).copied()
    }

    fn require_same_dimension(&self, other: &Vector<T>, operation: &'static str) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(LinalgError::mismatch(
                operation,
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T: Scalar> Vector<T> {
    /// `Σ self[i] * other[i]`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] unless both vectors have
    /// the same dimension. Two empty vectors give zero.
    pub fn dot_product(&self, other: &Vector<T>) -> Result<T> {
        self.require_same_dimension(other, "dot product")?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Same as [`Vector::dot_product`].
    pub fn inner_product(&self, other: &Vector<T>) -> Result<T> {
        self.dot_product(other)
    }

    /// Cross product of two 3-dimensional vectors.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when either operand does
    /// not have exactly three elements.
    pub fn cross_product(&self, other: &Vector<T>) -> Result<Vector<T>> {
        for operand in [self, other] {
            if operand.dimension() != 3 {
                return Err(LinalgError::mismatch(
                    "cross product",
                    3,
                    operand.dimension(),
                ));
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// `m x n` matrix with entry `(i, j) = self[i] * other[j]`.
    ///
    /// The operands may have different dimensions; an empty operand yields a
    /// matrix with no rows or no columns.
    pub fn outer_product(&self, other: &Vector<T>) -> Matrix<T> {
        let (rows, cols) = (self.dimension(), other.dimension());
        log::trace!("outer product: building {}x{} matrix", rows, cols);
        let mut data = Vec::with_capacity(rows * cols);
        for &a in self.iter() {
            data.extend(other.iter().map(|&b| a * b));
        }
        Matrix::from_parts(rows, cols, data)
    }

    /// Sum of all elements; zero for an empty vector.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Multiplies every element by `k`.
    pub fn scalar_multiply(&self, k: T) -> Vector<T> {
        self.iter().map(|&v| v * k).collect()
    }

    /// Element-wise sum. Fails unless both vectors have the same dimension.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.require_same_dimension(other, "add")?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a + b)
            .collect())
    }

    /// Element-wise difference. Fails unless both vectors have the same dimension.
    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.require_same_dimension(other, "subtract")?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a - b)
            .collect())
    }

    /// `n x 1` matrix holding the elements as a single column.
    pub fn as_column_matrix(&self) -> Matrix<T> {
        Matrix::from_parts(self.dimension(), 1, self.to_vec())
    }

    /// `1 x n` matrix holding the elements as a single row.
    pub fn as_row_matrix(&self) -> Matrix<T> {
        Matrix::from_parts(1, self.dimension(), self.to_vec())
    }
}

impl<T: Float> Vector<T> {
    /// Euclidean length.
    pub fn l2_norm(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
    }

    /// Element-wise comparison within `config`'s tolerance.
    ///
    /// Vectors of different dimension are never equal.
    pub fn approx_eq(&self, other: &Vector<T>, config: &ToleranceConfig) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| config.is_close(a, b))
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a, T: Scalar> Mul<T> for &'a Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scalar_multiply(rhs)
    }
}

impl<'a, T> Neg for &'a Vector<T>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.iter().map(|&v| -v).collect()
    }
}

#[cfg(feature = "ndarray")]
impl<T: Clone> From<ndarray::Array1<T>> for Vector<T> {
    fn from(value: ndarray::Array1<T>) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

#[cfg(feature = "ndarray")]
impl<T> From<Vector<T>> for ndarray::Array1<T> {
    fn from(value: Vector<T>) -> Self {
        ndarray::Array1::from_vec(value.data)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
