//! Integration tests for ndarray interop.

use mat_numeric::{MatDouble, MatSingle};
use ndarray::{array, Array2, ShapeBuilder};

#[test]
fn to_ndarray_keeps_logical_layout() {
    let a = MatSingle::from_packed("a", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2).unwrap();
    let nd = a.to_ndarray();
    assert_eq!(nd, array![[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]);
}

#[test]
fn from_ndarray_repacks_to_column_major() {
    let nd = array![[1.0, 2.0], [3.0, 4.0]];
    let a = MatDouble::from_ndarray("m", &nd);
    assert_eq!(a.dims(), &[2, 2]);
    assert_eq!(a.real(), &[1.0, 3.0, 2.0, 4.0]);
    assert_eq!(a.to_ndarray(), nd);
}

#[test]
fn from_ndarray_accepts_fortran_order_input() {
    let nd = Array2::from_shape_vec((2, 3).f(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let a = MatDouble::from_ndarray("f", &nd);
    assert_eq!(a.real(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(a.get_real(0, 1).unwrap(), nd[[0, 1]]);
}

#[test]
fn complex_ndarray_round_trip() {
    let re = array![[1.0f32, 2.0], [3.0, 4.0]];
    let im = array![[-1.0f32, -2.0], [-3.0, -4.0]];
    let z = MatSingle::from_ndarray_complex("z", &re, &im).unwrap();
    assert!(z.is_complex());
    assert_eq!(z.to_ndarray(), re);
    assert_eq!(z.imag_to_ndarray().unwrap(), im);

    let wrong = array![[1.0f32, 2.0]];
    assert!(MatSingle::from_ndarray_complex("z", &re, &wrong).is_err());
}
