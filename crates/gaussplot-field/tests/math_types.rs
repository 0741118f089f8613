//! Integration tests for the custom Array1 and Array2 math types.

use gaussplot_field::math::{Array1, Array2};

// ---------------------------------------------------------------------------
// Array1 basics
// ---------------------------------------------------------------------------

#[test]
fn array1_from_vec_and_len() {
    let a = Array1::from_vec(vec![1.0f64, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert!(!a.is_empty());
}

#[test]
fn array1_empty() {
    let a: Array1<f64> = Array1::from_vec(vec![]);
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
}

#[test]
fn array1_zeros() {
    let a: Array1<f64> = Array1::zeros(4);
    assert_eq!(a.len(), 4);
    for v in a.iter() {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn array1_indexing() {
    let a = Array1::from_vec(vec![10, 20, 30]);
    assert_eq!(a[0], 10);
    assert_eq!(a[1], 20);
    assert_eq!(a[2], 30);
}

#[test]
fn array1_mapv() {
    let a = Array1::from_vec(vec![1.0f64, 2.0, 3.0]);
    let doubled = a.mapv(|x| x * 2.0);
    assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn array1_from_iterator() {
    let a: Array1<f64> = (0..5).map(|i| i as f64).collect();
    assert_eq!(a.len(), 5);
    assert_eq!(a[4], 4.0);
}

#[test]
fn array1_mean() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    assert!((a.mean().unwrap() - 2.5).abs() < 1e-12);
}

#[test]
fn array1_mean_empty_is_none() {
    let a: Array1<f64> = Array1::from_vec(vec![]);
    assert!(a.mean().is_none());
}

// ---------------------------------------------------------------------------
// Array2 basics
// ---------------------------------------------------------------------------

#[test]
fn array2_from_shape_vec() {
    let a = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    assert_eq!(a.shape(), (2, 3));
}

#[test]
fn array2_shape_mismatch_errors() {
    let result = Array2::<f64>::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn array2_indexing() {
    let a = Array2::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a[(0, 0)], 1);
    assert_eq!(a[(0, 1)], 2);
    assert_eq!(a[(1, 0)], 3);
    assert_eq!(a[(1, 1)], 4);
}

#[test]
fn array2_row_slice() {
    let a = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.row_slice(0), &[1, 2, 3]);
    assert_eq!(a.row_slice(1), &[4, 5, 6]);
}

#[test]
fn array2_column() {
    let a = Array2::from_shape_vec((3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();
    let col0 = a.column(0);
    assert_eq!(col0.to_vec(), vec![1, 3, 5]);
    let col1 = a.column(1);
    assert_eq!(col1.to_vec(), vec![2, 4, 6]);
}

#[test]
fn array2_mapv() {
    let a = Array2::from_shape_vec((2, 2), vec![1.0f64, 2.0, 3.0, 4.0]).unwrap();
    let neg = a.mapv(|x| -x);
    assert_eq!(neg[(0, 0)], -1.0);
    assert_eq!(neg[(1, 1)], -4.0);
}

#[test]
fn array2_zip_mapv() {
    let a = Array2::from_shape_vec((2, 2), vec![1.0f64, 2.0, 3.0, 4.0]).unwrap();
    let b = Array2::from_shape_vec((2, 2), vec![10.0f64, 20.0, 30.0, 40.0]).unwrap();
    let prod = a.zip_mapv(&b, |x, y| x * y);
    assert_eq!(prod[(0, 0)], 10.0);
    assert_eq!(prod[(1, 1)], 160.0);
}

#[test]
#[should_panic(expected = "equal shape")]
fn array2_zip_mapv_shape_mismatch_panics() {
    let a = Array2::from_shape_vec((2, 2), vec![1.0f64, 2.0, 3.0, 4.0]).unwrap();
    let b = Array2::from_shape_vec((1, 4), vec![1.0f64, 2.0, 3.0, 4.0]).unwrap();
    let _ = a.zip_mapv(&b, |x, y| x + y);
}

#[test]
fn array2_mean() {
    let a = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!((a.mean().unwrap() - 2.5).abs() < 1e-12);
}

#[test]
fn array2_argmax() {
    let a = Array2::from_shape_vec((2, 3), vec![0.1, 0.5, 0.2, 0.9, 0.3, 0.4]).unwrap();
    assert_eq!(a.argmax(), Some((1, 0)));
}

#[test]
fn array2_argmax_ignores_nan() {
    let a = Array2::from_shape_vec((1, 3), vec![0.1, f64::NAN, 0.3]).unwrap();
    assert_eq!(a.argmax(), Some((0, 2)));
}
