use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::gaussian::GaussianParams;
use crate::grid;
use crate::math::Array1;

/// Extent and sampling density of the grid, one axis per pair of fields.
/// Both axes start at zero and run to their length inclusive.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GridConfig {
    pub x_length: f64,
    pub x_intervals: usize,
    pub y_length: f64,
    pub y_intervals: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_length: 0.5,
            x_intervals: 50,
            y_length: 1.0,
            y_intervals: 100,
        }
    }
}

impl GridConfig {
    /// Coordinate vector along x: `[0, x_length]` with `x_intervals` steps.
    pub fn x_vector(&self) -> Result<Array1<f64>, FieldError> {
        grid::linspace(0.0, self.x_length, self.x_intervals)
    }

    /// Coordinate vector along y: `[0, y_length]` with `y_intervals` steps.
    pub fn y_vector(&self) -> Result<Array1<f64>, FieldError> {
        grid::linspace(0.0, self.y_length, self.y_intervals)
    }
}

/// Central configuration for one render of the Gaussian field.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RenderConfig {
    pub grid: GridConfig,
    pub gaussian: GaussianParams,
    /// Number of filled contour levels.
    pub levels: usize,
    /// Plotly color scale name, see `report::plots::parse_palette`.
    pub color_map: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            gaussian: GaussianParams::default(),
            levels: 40,
            color_map: "viridis".to_string(),
        }
    }
}
