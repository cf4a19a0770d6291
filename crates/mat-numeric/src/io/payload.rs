use std::io::{Read, Write};

use anyhow::{anyhow, Context, Result};

use crate::array::NumericArray;
use crate::codec::Element;
use crate::config::CodecConfig;
use crate::types::{ArrayFlags, MatClass};

/// Allocate an empty array from the header fields of an array element.
pub fn allocate_array<T: Element>(
    name: &str,
    dims: &[usize],
    class: MatClass,
    flags: ArrayFlags,
    config: &CodecConfig,
) -> Result<NumericArray<T>> {
    let array = if config.validate_class {
        NumericArray::with_class(name, dims, class, flags)
    } else {
        if class != T::CLASS {
            log::warn!(
                "array '{}' declares class '{}' but is stored as '{}'",
                name,
                class,
                T::CLASS
            );
        }
        NumericArray::new(name, dims, flags)
    };
    array.with_context(|| format!("Failed to allocate array '{}'", name))
}

/// Read and decode the real payload of `array` from `reader`.
pub fn read_real_payload<T, R>(
    reader: &mut R,
    array: &mut NumericArray<T>,
    config: &CodecConfig,
) -> Result<()>
where
    T: Element,
    R: Read,
{
    let bytes = read_payload(reader, array)?;
    array
        .set_real_from_bytes(&bytes, config.byte_order)
        .with_context(|| format!("Failed to decode real data for '{}'", array.name()))
}

/// Read and decode the imaginary payload of a complex `array` from `reader`.
pub fn read_imag_payload<T, R>(
    reader: &mut R,
    array: &mut NumericArray<T>,
    config: &CodecConfig,
) -> Result<()>
where
    T: Element,
    R: Read,
{
    if !array.is_complex() {
        return Err(anyhow!("Array '{}' is not complex", array.name()));
    }
    let bytes = read_payload(reader, array)?;
    array
        .set_imag_from_bytes(&bytes, config.byte_order)
        .with_context(|| format!("Failed to decode imaginary data for '{}'", array.name()))
}

/// Encode the real part of `array` into `writer`. Returns the number of bytes written.
pub fn write_real_payload<T, W>(
    writer: &mut W,
    array: &NumericArray<T>,
    config: &CodecConfig,
) -> Result<usize>
where
    T: Element,
    W: Write,
{
    let bytes = array.real_bytes(config.byte_order);
    writer
        .write_all(&bytes)
        .with_context(|| format!("Failed to write real data for '{}'", array.name()))?;
    log::trace!("wrote {} real bytes for '{}'", bytes.len(), array.name());
    Ok(bytes.len())
}

/// Encode the imaginary part of a complex `array` into `writer`.
pub fn write_imag_payload<T, W>(
    writer: &mut W,
    array: &NumericArray<T>,
    config: &CodecConfig,
) -> Result<usize>
where
    T: Element,
    W: Write,
{
    let bytes = array
        .imag_bytes(config.byte_order)
        .ok_or_else(|| anyhow!("Array '{}' is not complex", array.name()))?;
    writer
        .write_all(&bytes)
        .with_context(|| format!("Failed to write imaginary data for '{}'", array.name()))?;
    log::trace!("wrote {} imaginary bytes for '{}'", bytes.len(), array.name());
    Ok(bytes.len())
}

fn read_payload<T: Element, R: Read>(reader: &mut R, array: &NumericArray<T>) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; array.size() * T::BYTE_WIDTH];
    reader.read_exact(&mut bytes).with_context(|| {
        format!(
            "Failed to read {} bytes of {} data for '{}'",
            bytes.len(),
            T::CLASS,
            array.name()
        )
    })?;
    Ok(bytes)
}
