//! Fixed-width element codec.
//!
//! Every numeric kind that can live in a [`NumericArray`](crate::array::NumericArray)
//! implements [`Element`], which bundles the zero value, the fixed byte width,
//! the class/data-type tags and the byte encode/decode pair. The byte order is
//! dictated by the file being read or written and is always passed in by the
//! caller; nothing here swaps bytes on its own.
use std::fmt;
use std::str::FromStr;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{MatError, Result};
use crate::types::{MatClass, MatDataType};

/// Byte order of element payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first (header indicator `MI`).
    #[default]
    Big,
    /// Least significant byte first (header indicator `IM`).
    Little,
}

impl ByteOrder {
    /// Map the two-byte endian indicator of a file header to a byte order.
    pub fn from_indicator(indicator: &[u8; 2]) -> Option<ByteOrder> {
        match indicator {
            b"MI" => Some(ByteOrder::Big),
            b"IM" => Some(ByteOrder::Little),
            _ => None,
        }
    }

    /// The endian indicator a writer emits for this order.
    pub fn indicator(self) -> [u8; 2] {
        match self {
            ByteOrder::Big => *b"MI",
            ByteOrder::Little => *b"IM",
        }
    }
}

impl FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "big" | "be" | "mi" => Ok(ByteOrder::Big),
            "little" | "le" | "im" => Ok(ByteOrder::Little),
            _ => Err(format!(
                "Unknown byte order: {}. Expected one of: big, be, mi, little, le, im",
                s
            )),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Big => write!(f, "big"),
            ByteOrder::Little => write!(f, "little"),
        }
    }
}

/// A fixed-width numeric kind storable in a numeric array.
pub trait Element:
    'static + Copy + fmt::Debug + fmt::Display + PartialEq + Zero + Send + Sync
{
    /// Number of bytes one element occupies in a payload.
    const BYTE_WIDTH: usize;
    /// Array class this kind maps to.
    const CLASS: MatClass;
    /// Data type code used for payloads of this kind.
    const DATA_TYPE: MatDataType;

    /// Decode exactly [`Element::BYTE_WIDTH`] bytes.
    fn decode_with(bytes: &[u8], order: ByteOrder) -> Result<Self>;

    /// Encode into exactly [`Element::BYTE_WIDTH`] bytes.
    fn encode_with(self, order: ByteOrder) -> Vec<u8>;

    fn byte_width() -> usize {
        Self::BYTE_WIDTH
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with(bytes, ByteOrder::default())
    }

    fn encode(self) -> Vec<u8> {
        self.encode_with(ByteOrder::default())
    }
}

macro_rules! element {
    ($ty:ty, $width:expr, $class:expr, $data_type:expr) => {
        const _: () = assert!(std::mem::size_of::<$ty>() == $width);

        impl Element for $ty {
            const BYTE_WIDTH: usize = $width;
            const CLASS: MatClass = $class;
            const DATA_TYPE: MatDataType = $data_type;

            fn decode_with(bytes: &[u8], order: ByteOrder) -> Result<Self> {
                let raw: [u8; $width] =
                    bytes
                        .try_into()
                        .map_err(|_| MatError::InvalidByteLength {
                            expected: $width,
                            got: bytes.len(),
                        })?;
                Ok(match order {
                    ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    ByteOrder::Little => <$ty>::from_le_bytes(raw),
                })
            }

            fn encode_with(self, order: ByteOrder) -> Vec<u8> {
                match order {
                    ByteOrder::Big => self.to_be_bytes().to_vec(),
                    ByteOrder::Little => self.to_le_bytes().to_vec(),
                }
            }
        }
    };
}

element!(f32, 4, MatClass::Single, MatDataType::Single);
element!(f64, 8, MatClass::Double, MatDataType::Double);
element!(i8, 1, MatClass::Int8, MatDataType::Int8);
element!(u8, 1, MatClass::UInt8, MatDataType::UInt8);
element!(i16, 2, MatClass::Int16, MatDataType::Int16);
element!(u16, 2, MatClass::UInt16, MatDataType::UInt16);
element!(i32, 4, MatClass::Int32, MatDataType::Int32);
element!(u32, 4, MatClass::UInt32, MatDataType::UInt32);
element!(i64, 8, MatClass::Int64, MatDataType::Int64);
element!(u64, 8, MatClass::UInt64, MatDataType::UInt64);

/// Decode a payload holding exactly `count` elements.
pub fn decode_slice<T: Element>(bytes: &[u8], count: usize, order: ByteOrder) -> Result<Vec<T>> {
    let expected = count * T::BYTE_WIDTH;
    if bytes.len() != expected {
        return Err(MatError::InvalidByteLength {
            expected,
            got: bytes.len(),
        });
    }
    bytes
        .chunks_exact(T::BYTE_WIDTH)
        .map(|chunk| T::decode_with(chunk, order))
        .collect()
}

/// Encode every value back to back.
pub fn encode_slice<T: Element>(values: &[T], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * T::BYTE_WIDTH);
    for &value in values {
        bytes.extend_from_slice(&value.encode_with(order));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_is_big_endian_ieee754_by_default() {
        assert_eq!(1.5f32.encode(), vec![0x3f, 0xc0, 0x00, 0x00]);
        assert_eq!(1.5f32.encode_with(ByteOrder::Little), vec![0x00, 0x00, 0xc0, 0x3f]);
    }

    #[test]
    fn integer_kinds_use_twos_complement() {
        assert_eq!((-2i16).encode(), vec![0xff, 0xfe]);
        assert_eq!(i16::decode(&[0xff, 0xfe]).unwrap(), -2);
        assert_eq!(u8::decode(&[0xab]).unwrap(), 0xab);
    }

    #[test]
    fn decode_rejects_wrong_width() {
        let err = f64::decode(&[0u8; 4]).unwrap_err();
        assert_eq!(err, MatError::InvalidByteLength { expected: 8, got: 4 });
    }

    #[test]
    fn indicator_maps_both_orders() {
        assert_eq!(ByteOrder::from_indicator(b"MI"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_indicator(b"IM"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_indicator(b"XX"), None);
        assert_eq!(ByteOrder::Little.indicator(), *b"IM");
    }

    #[test]
    fn slice_helpers_validate_total_length() {
        let bytes = encode_slice(&[1u16, 2, 3], ByteOrder::Little);
        assert_eq!(bytes, vec![1, 0, 2, 0, 3, 0]);
        let values: Vec<u16> = decode_slice(&bytes, 3, ByteOrder::Little).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(decode_slice::<u16>(&bytes[..5], 3, ByteOrder::Little).is_err());
    }
}
