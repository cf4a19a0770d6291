use std::fmt;
use std::ops::{Index, IndexMut};

use crate::array::layout::{linear_index, pack_2d_to_flat, unpack_flat_to_2d};
use crate::codec::{decode_slice, encode_slice, ByteOrder, Element};
use crate::error::{MatError, Result};
use crate::types::{ArrayFlags, MatClass};

/// A named numeric matrix stored as flat column-major buffers.
///
/// The real part always holds `m() * n()` elements. The imaginary part is
/// present iff the array carries the complex flag, and has the same length.
/// Name, dimensions and class are fixed at construction; only element
/// contents change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericArray<T> {
    name: String,
    dims: Vec<usize>,
    class: MatClass,
    flags: ArrayFlags,
    real: Vec<T>,
    imag: Option<Vec<T>>,
}

impl<T: Element> NumericArray<T> {
    /// Create a zero-filled array sized by `dims`.
    ///
    /// `dims` needs at least two entries. Trailing dimensions past the second
    /// are folded into the column count. An imaginary buffer is allocated when
    /// `flags` has the complex bit set.
    pub fn new(name: impl Into<String>, dims: &[usize], flags: ArrayFlags) -> Result<Self> {
        let name = name.into();
        if dims.len() < 2 {
            return Err(MatError::dimension_mismatch(format!(
                "array '{}' needs at least 2 dimensions, got {}",
                name,
                dims.len()
            )));
        }

        let m = dims[0];
        let n = dims[1..]
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| {
                MatError::dimension_mismatch(format!(
                    "array '{}' dimensions {:?} overflow the addressable element count",
                    name, dims
                ))
            })?;
        let real = Self::create_array(m, n)?;
        let imag = if flags.is_complex() {
            Some(Self::create_array(m, n)?)
        } else {
            None
        };

        log::trace!(
            "allocated {} array '{}' with dims {:?} (complex: {})",
            T::CLASS,
            name,
            dims,
            flags.is_complex()
        );

        Ok(Self {
            name,
            dims: dims.to_vec(),
            class: T::CLASS,
            flags,
            real,
            imag,
        })
    }

    /// Like [`NumericArray::new`], but checks a class tag read from a file
    /// against the element kind.
    pub fn with_class(
        name: impl Into<String>,
        dims: &[usize],
        class: MatClass,
        flags: ArrayFlags,
    ) -> Result<Self> {
        if class != T::CLASS {
            return Err(MatError::ClassMismatch {
                expected: T::CLASS,
                got: class,
            });
        }
        Self::new(name, dims, flags)
    }

    /// Zero-filled flat buffer of `m * n` elements.
    ///
    /// Fails when the element count, or its payload size in bytes, does not
    /// fit in `usize`.
    pub fn create_array(m: usize, n: usize) -> Result<Vec<T>> {
        let len = m
            .checked_mul(n)
            .filter(|len| len.checked_mul(T::BYTE_WIDTH).is_some())
            .ok_or_else(|| {
                MatError::dimension_mismatch(format!(
                    "{} x {} elements of {} bytes overflow the addressable size",
                    m,
                    n,
                    T::BYTE_WIDTH
                ))
            })?;
        Ok(vec![T::zero(); len])
    }

    /// Build a real array from a column-major buffer and a row count.
    pub fn from_packed(name: impl Into<String>, values: Vec<T>, m: usize) -> Result<Self> {
        let n = columns_for(values.len(), m)?;
        Ok(Self::from_parts(
            name.into(),
            vec![m, n],
            ArrayFlags::empty(),
            values,
            None,
        ))
    }

    /// Build a complex array from two column-major buffers of equal length.
    pub fn from_packed_complex(
        name: impl Into<String>,
        real: Vec<T>,
        imag: Vec<T>,
        m: usize,
    ) -> Result<Self> {
        if real.len() != imag.len() {
            return Err(MatError::dimension_mismatch(format!(
                "real part has {} elements but imaginary part has {}",
                real.len(),
                imag.len()
            )));
        }
        let n = columns_for(real.len(), m)?;
        Ok(Self::from_parts(
            name.into(),
            vec![m, n],
            ArrayFlags::COMPLEX,
            real,
            Some(imag),
        ))
    }

    /// Build a real array from rectangular array-of-rows input.
    pub fn from_2d<R: AsRef<[T]>>(name: impl Into<String>, rows: &[R]) -> Result<Self> {
        let name = name.into();
        let flat = pack_2d_to_flat(rows)?;
        if rows.is_empty() {
            return Ok(Self::from_parts(name, vec![0, 0], ArrayFlags::empty(), flat, None));
        }
        Self::from_packed(name, flat, rows.len())
    }

    /// Build a complex array from two rectangular array-of-rows inputs of the same shape.
    pub fn from_2d_complex<R: AsRef<[T]>>(
        name: impl Into<String>,
        real: &[R],
        imag: &[R],
    ) -> Result<Self> {
        let name = name.into();
        if real.len() != imag.len() {
            return Err(MatError::dimension_mismatch(format!(
                "real part has {} rows but imaginary part has {}",
                real.len(),
                imag.len()
            )));
        }
        let real_flat = pack_2d_to_flat(real)?;
        let imag_flat = pack_2d_to_flat(imag)?;
        if real.is_empty() {
            return Ok(Self::from_parts(
                name,
                vec![0, 0],
                ArrayFlags::COMPLEX,
                real_flat,
                Some(imag_flat),
            ));
        }
        Self::from_packed_complex(name, real_flat, imag_flat, real.len())
    }

    pub(crate) fn from_parts(
        name: String,
        dims: Vec<usize>,
        flags: ArrayFlags,
        real: Vec<T>,
        imag: Option<Vec<T>>,
    ) -> Self {
        debug_assert_eq!(real.len(), dims.iter().product::<usize>());
        debug_assert_eq!(imag.is_some(), flags.is_complex());
        log::trace!("built {} array '{}' with dims {:?}", T::CLASS, name, dims);
        Self {
            name,
            dims,
            class: T::CLASS,
            flags,
            real,
            imag,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn ndims(&self) -> usize {
        self.dims.len()
    }

    /// Row count.
    pub fn m(&self) -> usize {
        self.dims[0]
    }

    /// Column count; any dimensions past the second are folded in.
    pub fn n(&self) -> usize {
        self.dims[1..].iter().product()
    }

    /// Number of elements in each part.
    pub fn size(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    pub fn class(&self) -> MatClass {
        self.class
    }

    pub fn flags(&self) -> ArrayFlags {
        self.flags
    }

    /// Class code and attribute bits packed the way the file format stores them.
    pub fn flags_word(&self) -> u32 {
        self.flags.to_word(self.class)
    }

    pub fn is_complex(&self) -> bool {
        self.imag.is_some()
    }

    pub fn is_logical(&self) -> bool {
        self.flags.is_logical()
    }

    pub fn is_global(&self) -> bool {
        self.flags.is_global()
    }

    #[inline]
    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        linear_index(row, col, self.m())
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.m() || col >= self.n() {
            return Err(MatError::IndexOutOfRange {
                index: vec![row, col],
                shape: vec![self.m(), self.n()],
            });
        }
        Ok(self.linear_index(row, col))
    }

    fn checked_offset(&self, index: usize) -> Result<usize> {
        if index >= self.size() {
            return Err(MatError::IndexOutOfRange {
                index: vec![index],
                shape: vec![self.size()],
            });
        }
        Ok(index)
    }

    fn imag_or_err(&self) -> Result<&[T]> {
        self.imag.as_deref().ok_or_else(|| not_complex(&self.name))
    }

    fn imag_mut_or_err(&mut self) -> Result<&mut [T]> {
        let name = &self.name;
        self.imag.as_deref_mut().ok_or_else(|| not_complex(name))
    }

    pub fn get_real(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.checked_index(row, col)?;
        Ok(self.real[offset])
    }

    pub fn set_real(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = self.checked_index(row, col)?;
        self.real[offset] = value;
        Ok(())
    }

    /// Imaginary element at `(row, col)`. Fails with [`MatError::NotComplex`]
    /// on a real array; the `*_imag*` accessors below behave the same way.
    pub fn get_imag(&self, row: usize, col: usize) -> Result<T> {
        let offset = self.checked_index(row, col)?;
        Ok(self.imag_or_err()?[offset])
    }

    pub fn set_imag(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let offset = self.checked_index(row, col)?;
        self.imag_mut_or_err()?[offset] = value;
        Ok(())
    }

    /// Real element at a flat column-major offset.
    pub fn get(&self, index: usize) -> Result<T> {
        let offset = self.checked_offset(index)?;
        Ok(self.real[offset])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let offset = self.checked_offset(index)?;
        self.real[offset] = value;
        Ok(())
    }

    pub fn get_imag_at(&self, index: usize) -> Result<T> {
        let offset = self.checked_offset(index)?;
        Ok(self.imag_or_err()?[offset])
    }

    pub fn set_imag_at(&mut self, index: usize, value: T) -> Result<()> {
        let offset = self.checked_offset(index)?;
        self.imag_mut_or_err()?[offset] = value;
        Ok(())
    }

    /// The whole real buffer in column-major order.
    pub fn real(&self) -> &[T] {
        &self.real
    }

    pub fn real_mut(&mut self) -> &mut [T] {
        &mut self.real
    }

    pub fn imag(&self) -> Option<&[T]> {
        self.imag.as_deref()
    }

    pub fn imag_mut(&mut self) -> Option<&mut [T]> {
        self.imag.as_deref_mut()
    }

    /// One column of the real part; contiguous because storage is column-major.
    pub fn column(&self, col: usize) -> Result<&[T]> {
        if col >= self.n() {
            return Err(MatError::IndexOutOfRange {
                index: vec![col],
                shape: vec![self.n()],
            });
        }
        let start = self.linear_index(0, col);
        Ok(&self.real[start..start + self.m()])
    }

    /// Copy the real part out as rows (`result[row][col]`).
    pub fn get_2d_array(&self) -> Vec<Vec<T>> {
        unpack_flat_to_2d(&self.real, self.m(), self.n())
    }

    /// Copy the imaginary part out as rows, if the array is complex.
    pub fn get_imag_2d_array(&self) -> Option<Vec<Vec<T>>> {
        self.imag
            .as_ref()
            .map(|imag| unpack_flat_to_2d(imag, self.m(), self.n()))
    }

    pub fn byte_width(&self) -> usize {
        T::BYTE_WIDTH
    }

    /// Decode one element in the default payload byte order.
    pub fn decode(&self, bytes: &[u8]) -> Result<T> {
        T::decode(bytes)
    }

    /// Encode one element in the default payload byte order.
    pub fn encode(&self, value: T) -> Vec<u8> {
        value.encode()
    }

    /// Serialize the real buffer as one payload.
    pub fn real_bytes(&self, order: ByteOrder) -> Vec<u8> {
        encode_slice(&self.real, order)
    }

    /// Serialize the imaginary buffer as one payload, if present.
    pub fn imag_bytes(&self, order: ByteOrder) -> Option<Vec<u8>> {
        self.imag.as_ref().map(|imag| encode_slice(imag, order))
    }

    /// Replace the real buffer from a payload of exactly `size() * byte_width()` bytes.
    pub fn set_real_from_bytes(&mut self, bytes: &[u8], order: ByteOrder) -> Result<()> {
        let values = decode_slice(bytes, self.size(), order)?;
        log::debug!(
            "decoded {} real elements into '{}' ({} order)",
            values.len(),
            self.name,
            order
        );
        self.real = values;
        Ok(())
    }

    /// Replace the imaginary buffer from a payload of exactly `size() * byte_width()` bytes.
    pub fn set_imag_from_bytes(&mut self, bytes: &[u8], order: ByteOrder) -> Result<()> {
        self.imag_or_err()?;
        let values = decode_slice(bytes, self.size(), order)?;
        log::debug!(
            "decoded {} imaginary elements into '{}' ({} order)",
            values.len(),
            self.name,
            order
        );
        self.imag = Some(values);
        Ok(())
    }
}

fn columns_for(len: usize, m: usize) -> Result<usize> {
    if m == 0 {
        if len == 0 {
            return Ok(0);
        }
        return Err(MatError::dimension_mismatch(format!(
            "{} values cannot be laid out in 0 rows",
            len
        )));
    }
    if len % m != 0 {
        return Err(MatError::dimension_mismatch(format!(
            "packed buffer length {} is not divisible by row count {}",
            len, m
        )));
    }
    Ok(len / m)
}

fn not_complex(name: &str) -> MatError {
    MatError::NotComplex {
        name: name.to_string(),
    }
}

impl<T: Element> Index<(usize, usize)> for NumericArray<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.m() && col < self.n(),
            "index ({}, {}) out of bounds",
            row,
            col
        );
        &self.real[self.linear_index(row, col)]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for NumericArray<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        assert!(
            row < self.m() && col < self.n(),
            "index ({}, {}) out of bounds",
            row,
            col
        );
        let offset = self.linear_index(row, col);
        &mut self.real[offset]
    }
}

impl<T: Element> fmt::Display for NumericArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} =", self.name)?;
        for row in 0..self.m() {
            for col in 0..self.n() {
                let offset = self.linear_index(row, col);
                if col > 0 {
                    write!(f, "\t")?;
                }
                match &self.imag {
                    Some(imag) => {
                        let im = imag[offset].to_string();
                        let sign = if im.starts_with('-') { "" } else { "+" };
                        write!(f, "{}{}{}i", self.real[offset], sign, im)?
                    }
                    None => write!(f, "{}", self.real[offset])?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_dims_fold_into_columns() {
        let a = NumericArray::<f64>::new("cube", &[2, 3, 4], ArrayFlags::empty()).unwrap();
        assert_eq!(a.m(), 2);
        assert_eq!(a.n(), 12);
        assert_eq!(a.size(), 24);
        assert_eq!(a.ndims(), 3);
    }

    #[test]
    fn imag_access_on_real_array_fails() {
        let mut a = NumericArray::<f32>::new("r", &[1, 1], ArrayFlags::empty()).unwrap();
        assert!(matches!(a.get_imag(0, 0), Err(MatError::NotComplex { .. })));
        assert!(a.set_imag_at(0, 1.0).is_err());
        assert!(a.set_imag_from_bytes(&[0; 4], ByteOrder::Big).is_err());
    }

    #[test]
    fn display_lists_rows() {
        let a = NumericArray::from_packed_complex("z", vec![1.0f32, 2.0], vec![0.5, -1.0], 1)
            .unwrap();
        assert_eq!(a.to_string(), "z =\n1+0.5i\t2-1i\n");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_operator_panics_out_of_range() {
        let a = NumericArray::from_packed("a", vec![1u8, 2], 2).unwrap();
        let _ = a[(0, 1)];
    }
}
