use plotly::common::{ColorScale, ColorScalePalette};
use plotly::layout::{Axis, Layout};
use plotly::{Contour, Plot};

use crate::math::{Array1, Array2};

/// Map a configuration color-map name onto a Plotly palette.
pub fn parse_palette(name: &str) -> Result<ColorScalePalette, String> {
    match name.to_lowercase().as_str() {
        "viridis" => Ok(ColorScalePalette::Viridis),
        "cividis" => Ok(ColorScalePalette::Cividis),
        "greys" => Ok(ColorScalePalette::Greys),
        "blues" => Ok(ColorScalePalette::Blues),
        "reds" => Ok(ColorScalePalette::Reds),
        "jet" => Ok(ColorScalePalette::Jet),
        "hot" => Ok(ColorScalePalette::Hot),
        "earth" => Ok(ColorScalePalette::Earth),
        "portland" => Ok(ColorScalePalette::Portland),
        "rainbow" => Ok(ColorScalePalette::Rainbow),
        _ => Err(format!(
            "Unknown color map: {}. Expected one of viridis, cividis, greys, blues, reds, jet, hot, earth, portland, rainbow",
            name
        )),
    }
}

/// Render a scalar field over a coordinate grid as a filled contour plot
/// with an equal aspect ratio on the x/y axes.
pub fn filled_contour(
    x: &Array1<f64>,
    y: &Array1<f64>,
    field: &Array2<f64>,
    levels: usize,
    color_map: &str,
    title: &str,
) -> Result<Plot, String> {
    if field.shape() != (y.len(), x.len()) {
        return Err(format!(
            "Field shape {:?} does not match grid ({}, {})",
            field.shape(),
            y.len(),
            x.len()
        ));
    }
    if levels == 0 {
        return Err("Contour level count must be at least 1".to_string());
    }

    let palette = parse_palette(color_map)?;

    let z: Vec<Vec<f64>> = (0..field.nrows())
        .map(|row| field.row_slice(row).to_vec())
        .collect();

    let trace = Contour::new(x.to_vec(), y.to_vec(), z)
        .color_scale(ColorScale::Palette(palette))
        .auto_contour(false)
        .n_contours(levels);

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("x"))
        .y_axis(Axis::new().title("y").scale_anchor("x"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}
