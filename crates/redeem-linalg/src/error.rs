use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Error returned by dimension-checked vector and matrix operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// An operand's dimension violates the operation's precondition.
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A matrix buffer does not fit the requested shape.
    Shape(ShapeError),
}

impl LinalgError {
    pub(crate) fn mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        log::debug!(
            "{} rejected: expected dimension {}, got {}",
            operation,
            expected,
            actual
        );
        LinalgError::DimensionMismatch {
            operation,
            expected,
            actual,
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, got {}",
                operation, expected, actual
            ),
            LinalgError::Shape(err) => write!(f, "{}", err),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Shape(err) => Some(err),
            LinalgError::DimensionMismatch { .. } => None,
        }
    }
}

impl From<ShapeError> for LinalgError {
    fn from(value: ShapeError) -> Self {
        LinalgError::Shape(value)
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
