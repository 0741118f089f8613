//! gaussplot-field: uniform coordinate grids and isotropic 2D Gaussian fields.
//!
//! This crate builds evenly spaced coordinate vectors, broadcasts them into
//! coordinate matrix pairs, evaluates an isotropic 2D Gaussian over the
//! resulting grid, and turns the fields into filled contour plots.
//!
//! The 2D evaluation ships in two deliberate variants: the direct
//! closed-form formula and the product of two 1D factors. Their fields
//! agree up to a constant factor, which is the comparison the plots are
//! meant to show.
pub mod config;
pub mod error;
pub mod gaussian;
pub mod grid;
pub mod math;
pub mod report;
