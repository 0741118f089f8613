//! Uniform coordinate vectors and coordinate grids.
//!
//! A coordinate vector samples one axis at evenly spaced positions; a pair
//! of them is broadcast into two matrices of shape `(y.len(), x.len())` so
//! a 2D field can be evaluated elementwise over the full grid.

use crate::error::FieldError;
use crate::math::{Array1, Array2};

/// Build an evenly spaced coordinate vector from `start` to `end`
/// inclusive, split into `intervals` steps (`intervals + 1` samples).
pub fn linspace(start: f64, end: f64, intervals: usize) -> Result<Array1<f64>, FieldError> {
    if intervals == 0 {
        return Err(FieldError::ZeroIntervals);
    }
    Ok(itertools_num::linspace(start, end, intervals + 1).collect())
}

/// Broadcast two coordinate vectors into a coordinate matrix pair.
///
/// The result has shape `(y.len(), x.len())`: the first matrix repeats `x`
/// down the rows, the second repeats `y` across the columns, so that
/// `(X[(i, j)], Y[(i, j)])` is the position of grid point `(i, j)`. The
/// inputs need not be sorted.
pub fn meshgrid(
    x: &Array1<f64>,
    y: &Array1<f64>,
) -> Result<(Array2<f64>, Array2<f64>), FieldError> {
    if x.is_empty() || y.is_empty() {
        return Err(FieldError::EmptyCoordinates);
    }

    let (rows, cols) = (y.len(), x.len());
    let mut x_data = Vec::with_capacity(rows * cols);
    let mut y_data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        x_data.extend_from_slice(x.as_slice());
        y_data.extend(std::iter::repeat(y[i]).take(cols));
    }

    let x_matrix =
        Array2::from_shape_vec((rows, cols), x_data).expect("meshgrid: x buffer matches shape");
    let y_matrix =
        Array2::from_shape_vec((rows, cols), y_data).expect("meshgrid: y buffer matches shape");

    log::debug!("Built {}x{} coordinate grid", rows, cols);

    Ok((x_matrix, y_matrix))
}
