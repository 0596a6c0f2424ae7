use std::error::Error;
use std::fmt;
use std::ops::Index;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::config::ToleranceConfig;
use crate::math::vector::Vector;

/// Dense row-major matrix.
///
/// `data.len() == rows * cols` is checked at construction and the shape never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(value: RawMatrix<T>) -> Result<Self, Self::Error> {
        Matrix::from_shape_vec((value.rows, value.cols), value.data)
    }
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(ShapeError::Buffer {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Builds a matrix from nested rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: ncols,
                    len: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T>
    where
        T: Copy,
    {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|row| self.row_slice(row).to_vec()).collect()
    }

    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix::from_parts(self.cols, self.rows, data)
    }
}

impl<T: Float> Matrix<T> {
    /// Element-wise comparison within `config`'s tolerance.
    ///
    /// Matrices of different shape are never equal.
    pub fn approx_eq(&self, other: &Matrix<T>, config: &ToleranceConfig) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| config.is_close(a, b))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

#[cfg(feature = "ndarray")]
impl<T: Clone> From<&ndarray::Array2<T>> for Matrix<T> {
    fn from(value: &ndarray::Array2<T>) -> Self {
        Matrix::from_parts(value.nrows(), value.ncols(), value.iter().cloned().collect())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Clone> From<Matrix<T>> for ndarray::Array2<T> {
    fn from(value: Matrix<T>) -> Self {
        ndarray::Array2::from_shape_fn(value.shape(), |(row, col)| value[(row, col)].clone())
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for col in 0..self.cols {
                write!(f, "{}", self[(row, col)])?;
                if col + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    Buffer { rows: usize, cols: usize, len: usize },
    RaggedRow { row: usize, expected: usize, len: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Buffer { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            ShapeError::RaggedRow { row, expected, len } => write!(
                f,
                "row {} has {} elements, expected {}",
                row, len, expected
            ),
        }
    }
}

impl Error for ShapeError {}
