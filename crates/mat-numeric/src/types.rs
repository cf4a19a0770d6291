//! Type tags and attribute bits carried by a numeric array.
//!
//! `MatClass` is the array class written into the array-flags word,
//! `MatDataType` is the element storage code used for data sub-elements and
//! `ArrayFlags` holds the attribute bits (complex, global, logical).
use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Numeric array classes and their on-disk class codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatClass {
    Double,
    Single,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
}

impl MatClass {
    pub const ALL: [MatClass; 10] = [
        MatClass::Double,
        MatClass::Single,
        MatClass::Int8,
        MatClass::UInt8,
        MatClass::Int16,
        MatClass::UInt16,
        MatClass::Int32,
        MatClass::UInt32,
        MatClass::Int64,
        MatClass::UInt64,
    ];

    pub fn code(self) -> u8 {
        match self {
            MatClass::Double => 6,
            MatClass::Single => 7,
            MatClass::Int8 => 8,
            MatClass::UInt8 => 9,
            MatClass::Int16 => 10,
            MatClass::UInt16 => 11,
            MatClass::Int32 => 12,
            MatClass::UInt32 => 13,
            MatClass::Int64 => 14,
            MatClass::UInt64 => 15,
        }
    }

    pub fn from_code(code: u8) -> Option<MatClass> {
        MatClass::ALL.iter().copied().find(|class| class.code() == code)
    }

    /// MATLAB name of the class, as printed by `class(x)`.
    pub fn name(self) -> &'static str {
        match self {
            MatClass::Double => "double",
            MatClass::Single => "single",
            MatClass::Int8 => "int8",
            MatClass::UInt8 => "uint8",
            MatClass::Int16 => "int16",
            MatClass::UInt16 => "uint16",
            MatClass::Int32 => "int32",
            MatClass::UInt32 => "uint32",
            MatClass::Int64 => "int64",
            MatClass::UInt64 => "uint64",
        }
    }

    /// Natural storage type for elements of this class.
    pub fn data_type(self) -> MatDataType {
        match self {
            MatClass::Double => MatDataType::Double,
            MatClass::Single => MatDataType::Single,
            MatClass::Int8 => MatDataType::Int8,
            MatClass::UInt8 => MatDataType::UInt8,
            MatClass::Int16 => MatDataType::Int16,
            MatClass::UInt16 => MatDataType::UInt16,
            MatClass::Int32 => MatDataType::Int32,
            MatClass::UInt32 => MatDataType::UInt32,
            MatClass::Int64 => MatDataType::Int64,
            MatClass::UInt64 => MatDataType::UInt64,
        }
    }
}

impl fmt::Display for MatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Element storage codes used by data sub-elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatDataType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Single,
    Double,
    Int64,
    UInt64,
}

impl MatDataType {
    pub fn code(self) -> u32 {
        match self {
            MatDataType::Int8 => 1,
            MatDataType::UInt8 => 2,
            MatDataType::Int16 => 3,
            MatDataType::UInt16 => 4,
            MatDataType::Int32 => 5,
            MatDataType::UInt32 => 6,
            MatDataType::Single => 7,
            MatDataType::Double => 9,
            MatDataType::Int64 => 12,
            MatDataType::UInt64 => 13,
        }
    }

    pub fn from_code(code: u32) -> Option<MatDataType> {
        match code {
            1 => Some(MatDataType::Int8),
            2 => Some(MatDataType::UInt8),
            3 => Some(MatDataType::Int16),
            4 => Some(MatDataType::UInt16),
            5 => Some(MatDataType::Int32),
            6 => Some(MatDataType::UInt32),
            7 => Some(MatDataType::Single),
            9 => Some(MatDataType::Double),
            12 => Some(MatDataType::Int64),
            13 => Some(MatDataType::UInt64),
            _ => None,
        }
    }

    pub fn byte_width(self) -> usize {
        match self {
            MatDataType::Int8 | MatDataType::UInt8 => 1,
            MatDataType::Int16 | MatDataType::UInt16 => 2,
            MatDataType::Int32 | MatDataType::UInt32 | MatDataType::Single => 4,
            MatDataType::Int64 | MatDataType::UInt64 | MatDataType::Double => 8,
        }
    }
}

/// Attribute bits of the array-flags word.
///
/// Bits other than the three named ones are carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayFlags(u32);

impl ArrayFlags {
    pub const COMPLEX: ArrayFlags = ArrayFlags(0x0800);
    pub const GLOBAL: ArrayFlags = ArrayFlags(0x0400);
    pub const LOGICAL: ArrayFlags = ArrayFlags(0x0200);

    const CLASS_MASK: u32 = 0xff;

    pub const fn empty() -> Self {
        ArrayFlags(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        ArrayFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: ArrayFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: ArrayFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: ArrayFlags) {
        self.0 &= !other.0;
    }

    pub fn is_complex(self) -> bool {
        self.contains(ArrayFlags::COMPLEX)
    }

    pub fn is_global(self) -> bool {
        self.contains(ArrayFlags::GLOBAL)
    }

    pub fn is_logical(self) -> bool {
        self.contains(ArrayFlags::LOGICAL)
    }

    /// Pack a class code and these attributes into one array-flags word.
    pub fn to_word(self, class: MatClass) -> u32 {
        (self.0 & !Self::CLASS_MASK) | class.code() as u32
    }

    /// Split an array-flags word into its class (if known) and attribute bits.
    pub fn split_word(word: u32) -> (Option<MatClass>, ArrayFlags) {
        let class = MatClass::from_code((word & Self::CLASS_MASK) as u8);
        (class, ArrayFlags(word & !Self::CLASS_MASK))
    }
}

impl BitOr for ArrayFlags {
    type Output = ArrayFlags;

    fn bitor(self, rhs: ArrayFlags) -> ArrayFlags {
        ArrayFlags(self.0 | rhs.0)
    }
}
