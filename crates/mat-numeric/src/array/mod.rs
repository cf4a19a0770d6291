//! Numeric array storage.
//!
//! [`NumericArray`] is generic over the element kind. The aliases below name
//! the concrete kinds the file format knows about.
pub mod interop;
pub mod layout;
pub mod numeric;

pub use layout::{linear_index, pack_2d_to_flat, unpack_flat_to_2d};
pub use numeric::NumericArray;

pub type MatSingle = NumericArray<f32>;
pub type MatDouble = NumericArray<f64>;
pub type MatInt8 = NumericArray<i8>;
pub type MatUInt8 = NumericArray<u8>;
pub type MatInt16 = NumericArray<i16>;
pub type MatUInt16 = NumericArray<u16>;
pub type MatInt32 = NumericArray<i32>;
pub type MatUInt32 = NumericArray<u32>;
pub type MatInt64 = NumericArray<i64>;
pub type MatUInt64 = NumericArray<u64>;
