//! Conversions to and from `ndarray::Array2`.
//!
//! `ndarray` arrays may be in any memory order; conversion always goes through
//! logical `(row, col)` indexing so the column-major invariant holds.
use ndarray::Array2;

use crate::array::NumericArray;
use crate::codec::Element;
use crate::error::{MatError, Result};
use crate::types::ArrayFlags;

impl<T: Element> NumericArray<T> {
    /// Copy the real part into an `(m, n)` ndarray.
    pub fn to_ndarray(&self) -> Array2<T> {
        let real = self.real();
        Array2::from_shape_fn((self.m(), self.n()), |(row, col)| {
            real[self.linear_index(row, col)]
        })
    }

    /// Copy the imaginary part into an `(m, n)` ndarray, if present.
    pub fn imag_to_ndarray(&self) -> Option<Array2<T>> {
        let imag = self.imag()?;
        Some(Array2::from_shape_fn((self.m(), self.n()), |(row, col)| {
            imag[self.linear_index(row, col)]
        }))
    }

    pub fn from_ndarray(name: impl Into<String>, array: &Array2<T>) -> Self {
        let (m, n) = array.dim();
        Self::from_parts(
            name.into(),
            vec![m, n],
            ArrayFlags::empty(),
            column_major(array),
            None,
        )
    }

    pub fn from_ndarray_complex(
        name: impl Into<String>,
        real: &Array2<T>,
        imag: &Array2<T>,
    ) -> Result<Self> {
        if real.dim() != imag.dim() {
            return Err(MatError::dimension_mismatch(format!(
                "real part has shape {:?} but imaginary part has {:?}",
                real.dim(),
                imag.dim()
            )));
        }
        let (m, n) = real.dim();
        Ok(Self::from_parts(
            name.into(),
            vec![m, n],
            ArrayFlags::COMPLEX,
            column_major(real),
            Some(column_major(imag)),
        ))
    }
}

fn column_major<T: Copy>(array: &Array2<T>) -> Vec<T> {
    // Logical iteration over the transpose visits the source column by column.
    array.t().iter().copied().collect()
}
