use std::error::Error;
use std::fmt;

use crate::types::MatClass;

/// Errors raised by array construction, element access and the element codec.
///
/// Every variant is a precondition violation detected at the call site. No
/// operation mutates an array before its inputs have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    /// Buffer lengths or shapes do not agree with the declared dimensions.
    DimensionMismatch { reason: String },
    /// A row/column (or flat) index lies outside the array shape.
    IndexOutOfRange { index: Vec<usize>, shape: Vec<usize> },
    /// A byte span does not match the element kind's fixed width.
    InvalidByteLength { expected: usize, got: usize },
    /// The requested array class does not match the element kind.
    ClassMismatch { expected: MatClass, got: MatClass },
    /// Imaginary data was accessed on an array without the complex flag.
    NotComplex { name: String },
}

impl MatError {
    pub(crate) fn dimension_mismatch(reason: impl Into<String>) -> Self {
        MatError::DimensionMismatch {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatError::DimensionMismatch { reason } => write!(f, "dimension mismatch: {}", reason),
            MatError::IndexOutOfRange { index, shape } => {
                write!(f, "index {:?} out of range for shape {:?}", index, shape)
            }
            MatError::InvalidByteLength { expected, got } => write!(
                f,
                "invalid byte length: expected {} bytes, got {}",
                expected, got
            ),
            MatError::ClassMismatch { expected, got } => write!(
                f,
                "array class mismatch: element kind is '{}' but '{}' was requested",
                expected, got
            ),
            MatError::NotComplex { name } => {
                write!(f, "array '{}' has no imaginary part", name)
            }
        }
    }
}

impl Error for MatError {}

pub type Result<T> = std::result::Result<T, MatError>;
