//! mat-numeric: typed numeric arrays for MAT-file interchange.
//!
//! A [`NumericArray`] owns a matrix's name, dimensions, class tag and
//! attribute flags together with flat column-major buffers for the real part
//! and, for complex arrays, the imaginary part. Each fixed-width numeric kind
//! implements [`Element`], which supplies the zero value, byte width and the
//! byte encode/decode pair file readers and writers call per element.
//!
//! File framing (headers, tags, compression) is left to the caller. The
//! [`io`] helpers only move raw element payloads.
pub mod array;
pub mod codec;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

pub use array::{
    MatDouble, MatInt16, MatInt32, MatInt64, MatInt8, MatSingle, MatUInt16, MatUInt32, MatUInt64,
    MatUInt8, NumericArray,
};
pub use codec::{ByteOrder, Element};
pub use config::CodecConfig;
pub use error::{MatError, Result};
pub use types::{ArrayFlags, MatClass, MatDataType};
