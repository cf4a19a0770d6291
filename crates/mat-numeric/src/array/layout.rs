//! Column-major index math shared by every accessor and packing routine.
use crate::error::{MatError, Result};

/// Flat offset of `(row, col)` in a column-major buffer with `m` rows.
#[inline]
pub fn linear_index(row: usize, col: usize, m: usize) -> usize {
    row + col * m
}

/// Pack a rectangular array-of-rows into a column-major flat buffer.
///
/// `d[row + col * rows.len()] = rows[row][col]`. Ragged input is rejected.
pub fn pack_2d_to_flat<T, R>(rows: &[R]) -> Result<Vec<T>>
where
    T: Copy,
    R: AsRef<[T]>,
{
    let m = rows.len();
    let n = rows.first().map_or(0, |row| row.as_ref().len());

    for (idx, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != n {
            return Err(MatError::dimension_mismatch(format!(
                "row {} has {} columns, expected {}",
                idx, len, n
            )));
        }
    }

    let mut flat = Vec::with_capacity(m * n);
    for col in 0..n {
        for row in rows {
            flat.push(row.as_ref()[col]);
        }
    }
    Ok(flat)
}

/// Inverse of [`pack_2d_to_flat`]: materialize rows from a column-major buffer.
pub fn unpack_flat_to_2d<T: Copy>(flat: &[T], m: usize, n: usize) -> Vec<Vec<T>> {
    debug_assert_eq!(flat.len(), m * n);
    (0..m)
        .map(|row| (0..n).map(|col| flat[linear_index(row, col, m)]).collect())
        .collect()
}
