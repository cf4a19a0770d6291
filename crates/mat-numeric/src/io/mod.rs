//! Stream helpers used by MAT-file readers and writers to move element
//! payloads in and out of a [`NumericArray`](crate::array::NumericArray).
//!
//! Tag framing, padding and compression belong to the caller; these helpers
//! only see the raw payload bytes.
pub mod payload;

pub use payload::{
    allocate_array, read_imag_payload, read_real_payload, write_imag_payload, write_real_payload,
};
