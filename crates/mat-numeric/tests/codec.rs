//! Integration tests for the element codec and bulk payload encoding.

use mat_numeric::codec::{decode_slice, encode_slice};
use mat_numeric::{ArrayFlags, ByteOrder, Element, MatError, MatSingle, NumericArray};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Single-element codec
// ---------------------------------------------------------------------------

#[test]
fn single_byte_width_is_four() {
    let a = MatSingle::new("a", &[1, 1], ArrayFlags::empty()).unwrap();
    assert_eq!(a.byte_width(), 4);
    assert_eq!(a.byte_width(), a.byte_width());
    assert_eq!(<f32 as Element>::byte_width(), 4);
    assert_eq!(f64::BYTE_WIDTH, 8);
    assert_eq!(i8::BYTE_WIDTH, 1);
    assert_eq!(u16::BYTE_WIDTH, 2);
    assert_eq!(u64::BYTE_WIDTH, 8);
}

#[test]
fn encode_then_decode_one_and_a_half() {
    let a = MatSingle::new("a", &[1, 1], ArrayFlags::empty()).unwrap();
    let bytes = a.encode(1.5);
    assert_eq!(bytes.len(), 4);
    assert_eq!(a.decode(&bytes).unwrap(), 1.5);
}

#[test]
fn decode_rejects_three_and_five_bytes() {
    let a = MatSingle::new("a", &[1, 1], ArrayFlags::empty()).unwrap();
    assert_eq!(
        a.decode(&[0; 3]).unwrap_err(),
        MatError::InvalidByteLength { expected: 4, got: 3 }
    );
    assert_eq!(
        a.decode(&[0; 5]).unwrap_err(),
        MatError::InvalidByteLength { expected: 4, got: 5 }
    );
}

#[test]
fn single_round_trip_is_bit_exact() {
    let mut rng = StdRng::seed_from_u64(7);
    for order in [ByteOrder::Big, ByteOrder::Little] {
        for _ in 0..10_000 {
            let value = f32::from_bits(rng.gen::<u32>());
            let decoded = f32::decode_with(&value.encode_with(order), order).unwrap();
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }
}

#[test]
fn special_float_values_round_trip() {
    for value in [0.0f64, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, f64::MIN_POSITIVE] {
        let decoded = f64::decode(&value.encode()).unwrap();
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
}

#[test]
fn integer_extremes_round_trip() {
    for order in [ByteOrder::Big, ByteOrder::Little] {
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(i32::decode_with(&value.encode_with(order), order).unwrap(), value);
        }
        for value in [0u64, 1, u64::MAX] {
            assert_eq!(u64::decode_with(&value.encode_with(order), order).unwrap(), value);
        }
        for value in [i8::MIN, i8::MAX] {
            assert_eq!(i8::decode_with(&value.encode_with(order), order).unwrap(), value);
        }
    }
}

#[test]
fn byte_order_is_honoured() {
    assert_eq!(0x0102_0304u32.encode_with(ByteOrder::Big), vec![1, 2, 3, 4]);
    assert_eq!(0x0102_0304u32.encode_with(ByteOrder::Little), vec![4, 3, 2, 1]);
    assert_eq!(u32::decode_with(&[1, 2, 3, 4], ByteOrder::Little).unwrap(), 0x0403_0201);
}

// ---------------------------------------------------------------------------
// Bulk payloads
// ---------------------------------------------------------------------------

#[test]
fn real_and_imag_payloads_round_trip() {
    let z = NumericArray::from_packed_complex("z", vec![1.0f64, 2.0, 3.0], vec![-1.0, 0.0, 0.5], 3)
        .unwrap();
    let real = z.real_bytes(ByteOrder::Little);
    let imag = z.imag_bytes(ByteOrder::Little).unwrap();
    assert_eq!(real.len(), 24);

    let mut copy = NumericArray::<f64>::new("z", &[3, 1], ArrayFlags::COMPLEX).unwrap();
    copy.set_real_from_bytes(&real, ByteOrder::Little).unwrap();
    copy.set_imag_from_bytes(&imag, ByteOrder::Little).unwrap();
    assert_eq!(copy, z);
}

#[test]
fn payload_length_must_match_exactly() {
    let mut a = MatSingle::new("a", &[2, 2], ArrayFlags::empty()).unwrap();
    let err = a.set_real_from_bytes(&[0u8; 12], ByteOrder::Big).unwrap_err();
    assert_eq!(err, MatError::InvalidByteLength { expected: 16, got: 12 });
    assert_eq!(a.size(), 4);
}

#[test]
fn slice_helpers_match_per_element_codec() {
    let values = [1i16, -1, 300];
    let bytes = encode_slice(&values, ByteOrder::Big);
    let manual: Vec<u8> = values.iter().flat_map(|v| v.encode()).collect();
    assert_eq!(bytes, manual);
    assert_eq!(decode_slice::<i16>(&bytes, 3, ByteOrder::Big).unwrap(), values.to_vec());
}

#[test]
fn real_array_has_no_imag_payload() {
    let a = MatSingle::from_packed("a", vec![1.0], 1).unwrap();
    assert!(a.imag_bytes(ByteOrder::Big).is_none());
}
